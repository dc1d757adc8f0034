//! Page environment contract: user agent, viewport width, and navigation.

use std::{cell::RefCell, rc::Rc};

/// Read access to the hosting page plus top-level navigation.
pub trait PageEnvironment {
    /// Browser identification string.
    fn user_agent(&self) -> String;

    /// Viewport width in CSS pixels, when a viewport exists.
    fn inner_width(&self) -> Option<f64>;

    /// Navigates the page to `url`.
    fn navigate_to(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Default)]
struct MemoryPageState {
    user_agent: String,
    inner_width: Option<f64>,
    navigations: Vec<String>,
}

/// In-memory page environment that records navigations instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageEnvironment {
    inner: Rc<RefCell<MemoryPageState>>,
}

impl MemoryPageEnvironment {
    /// Sets the reported user agent.
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.inner.borrow_mut().user_agent = user_agent.into();
        self
    }

    /// Sets the reported viewport width.
    pub fn with_inner_width(self, width: f64) -> Self {
        self.inner.borrow_mut().inner_width = Some(width);
        self
    }

    /// URLs passed to [`PageEnvironment::navigate_to`], in call order.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }
}

impl PageEnvironment for MemoryPageEnvironment {
    fn user_agent(&self) -> String {
        self.inner.borrow().user_agent.clone()
    }

    fn inner_width(&self) -> Option<f64> {
        self.inner.borrow().inner_width
    }

    fn navigate_to(&self, url: &str) -> Result<(), String> {
        self.inner.borrow_mut().navigations.push(url.to_string());
        Ok(())
    }
}

/// Environment with no page: empty user agent, no viewport, navigation unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPageEnvironment;

impl PageEnvironment for NoopPageEnvironment {
    fn user_agent(&self) -> String {
        String::new()
    }

    fn inner_width(&self) -> Option<f64> {
        None
    }

    fn navigate_to(&self, _url: &str) -> Result<(), String> {
        Err("page navigation is unavailable".to_string())
    }
}
