pub mod button;
pub mod range_slider;

pub use button::Button;
pub use range_slider::RangeSlider;
