use std::sync::Arc;
use nn_core::{NewsApi, Result};
use crate::render::Pages;

pub struct AppState {
    pub api: Arc<dyn NewsApi>,
    pub pages: Pages,
}

impl AppState {
    pub fn new(api: Arc<dyn NewsApi>) -> Result<Self> {
        Ok(Self {
            api,
            pages: Pages::new()?,
        })
    }
}
