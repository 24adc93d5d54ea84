//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::layout::Layout;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(layout: &Layout) -> bool {
    !layout.stock().is_empty()
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(layout: &Layout) -> bool {
    layout.stock().is_empty() && !layout.waste().is_empty()
}
