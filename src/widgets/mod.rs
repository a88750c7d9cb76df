//! Built-in widgets: each file carries one widget's default table, concern
//! composition, and state fallbacks.

pub mod background;
pub mod border;
pub mod button;
pub mod divider;
pub mod flex;
pub mod grid;
pub mod layer;
pub mod link;
pub mod motion;
pub mod padding;
pub mod position;
pub mod spacing;
pub mod text;
pub mod touchable;

pub use background::Background;
pub use border::Border;
pub use button::Button;
pub use divider::Divider;
pub use flex::Flex;
pub use grid::Grid;
pub use layer::Layer;
pub use link::LinkHref;
pub use motion::MotionLayer;
pub use padding::Padding;
pub use position::Position;
pub use spacing::Spacing;
pub use text::Text;
pub use touchable::TouchableOpacity;

use crate::widget::traits::Widget;

/// Every built-in widget, boxed for registry registration.
pub fn built_in() -> Vec<Box<dyn Widget>> {
    vec![
        Box::new(Layer),
        Box::new(Flex),
        Box::new(Grid),
        Box::new(Button),
        Box::new(Text),
        Box::new(TouchableOpacity),
        Box::new(LinkHref),
        Box::new(Divider),
        Box::new(Position),
        Box::new(Padding),
        Box::new(Spacing),
        Box::new(Background),
        Box::new(Border),
        Box::new(MotionLayer),
    ]
}
