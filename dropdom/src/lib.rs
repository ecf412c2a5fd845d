pub mod dropdown;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod schedule;
pub mod style;
pub mod terminal;

pub use dropdown::{DropdownState, Markers, Widget, ARIA_EXPANDED, MENU_LINK_CLOSE_DELAY};
pub use element::{find_element, find_element_mut, is_within, path_to, Content, Element};
pub use event::{Event, InputMode, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout_header, LayoutResult, Rect, HEADER_HEIGHT};
pub use schedule::Schedule;
pub use style::{lighten, mix, Overrides, Rgb, Style, Visibility};
pub use terminal::Terminal;
