use quire_core::{Presenter, Routes};

/// Terminal side of the navigator: layout requests and control state
#[derive(Debug, Default)]
pub struct Chrome {
    /// Routes the four arrows currently show
    pub routes: Routes,
    layout_requested: bool,
    /// Number of layout refreshes requested so far
    pub layout_requests: usize,
}

impl Chrome {
    /// Consume a pending layout request
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }
}

impl Presenter for Chrome {
    fn refresh_layout(&mut self) {
        self.layout_requested = true;
        self.layout_requests += 1;
    }

    fn refresh_controls(&mut self, routes: Routes) {
        self.routes = routes;
    }
}
