use portal_core::model::ModuleNumber;

/// Which main-app view is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Module(ModuleNumber),
    Resources,
}

/// Three-state view switch for the main app.
///
/// There is no history stack: leaving a detail view always returns home, and
/// the two detail views are not reachable from each other — both are only
/// offered from home.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    view: View,
}

impl ViewRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(self) -> View {
        self.view
    }

    /// The module whose detail page is open, if any.
    #[must_use]
    pub fn current_module(self) -> Option<ModuleNumber> {
        match self.view {
            View::Module(number) => Some(number),
            _ => None,
        }
    }

    /// Home sections (module grid, progress panel, admin panel) are visible
    /// only on the home view.
    #[must_use]
    pub fn home_sections_visible(self) -> bool {
        self.view == View::Home
    }

    /// The shared detail pane is visible on both detail views.
    #[must_use]
    pub fn detail_visible(self) -> bool {
        !self.home_sections_visible()
    }

    /// Open a module detail page. Only valid from home.
    pub fn open_module(&mut self, module: ModuleNumber) {
        if self.view == View::Home {
            self.view = View::Module(module);
        }
    }

    /// Open the resources page. Only valid from home.
    pub fn open_resources(&mut self) {
        if self.view == View::Home {
            self.view = View::Resources;
        }
    }

    /// Return to home from any view.
    pub fn go_home(&mut self) {
        self.view = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(value: u8) -> ModuleNumber {
        ModuleNumber::new(value).unwrap()
    }

    #[test]
    fn home_module_home_restores_the_home_sections() {
        let mut router = ViewRouter::new();
        assert!(router.home_sections_visible());
        assert!(!router.detail_visible());

        router.open_module(module(3));
        assert_eq!(router.current_module(), Some(module(3)));
        assert!(!router.home_sections_visible());
        assert!(router.detail_visible());

        router.go_home();
        assert_eq!(router.view(), View::Home);
        assert!(router.home_sections_visible());
        assert!(!router.detail_visible());
    }

    #[test]
    fn home_resources_home_restores_the_home_sections() {
        let mut router = ViewRouter::new();
        router.open_resources();
        assert_eq!(router.view(), View::Resources);
        assert!(router.detail_visible());
        assert_eq!(router.current_module(), None);

        router.go_home();
        assert!(router.home_sections_visible());
    }

    #[test]
    fn detail_views_are_not_reachable_from_each_other() {
        let mut router = ViewRouter::new();
        router.open_module(module(1));
        router.open_resources();
        assert_eq!(router.view(), View::Module(module(1)));

        router.go_home();
        router.open_resources();
        router.open_module(module(2));
        assert_eq!(router.view(), View::Resources);
    }

    #[test]
    fn back_always_returns_home_never_a_prior_module() {
        let mut router = ViewRouter::new();
        router.open_module(module(4));
        router.go_home();
        router.open_resources();
        router.go_home();
        assert_eq!(router.view(), View::Home);
    }
}
