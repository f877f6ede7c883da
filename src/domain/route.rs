use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Logical screens and the paths they are mounted at
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Route {
    #[default]
    Home,
    LocationSuggest,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::LocationSuggest => "/locationsuggest",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Route::iter().find(|route| route.path() == path)
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| {
            let known: Vec<&str> = Route::iter().map(|route| route.path()).collect();
            format!("unknown path '{s}' (expected one of: {})", known.join(", "))
        })
    }
}
