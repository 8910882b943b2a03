mod dish_detail;
mod menu;

use confusion_boundary::DishId;

pub const MENU_PATH: &str = "/menu";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Menu,
    Dish(DishId),
}

impl Page {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Menu => MENU_PATH.to_string(),
            Self::Dish(id) => format!("{MENU_PATH}/{id}"),
        }
    }
}

pub use self::{dish_detail::*, menu::*};
