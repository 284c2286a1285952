//! Section navigation and mobile menu state.
//!
//! The page shows exactly one [`Section`] at a time. The mobile drawer is a
//! separate two-state machine that is forced closed by navigation, by pointer
//! events outside the drawer, and by the viewport growing to desktop width.

use crate::config::MOBILE_BREAKPOINT_PX;

/// Logical page sections, one per navigation entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Solutions,
    ClientsAndPartners,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Solutions,
        Section::ClientsAndPartners,
        Section::Contact,
    ];

    /// DOM anchor id of the section's root element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Solutions => "solutions",
            Self::ClientsAndPartners => "clients-and-partners",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Solutions => "Solutions",
            Self::ClientsAndPartners => "Clients & Partners",
            Self::Contact => "Contact",
        }
    }
}

/// Actions exposed by the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// One of the six labeled entries.
    Go(Section),
    /// The "Get a Quote" shortcut.
    GetAQuote,
}

impl NavAction {
    /// Section this action lands on.
    pub fn target(self) -> Section {
        match self {
            Self::Go(section) => section,
            Self::GetAQuote => Section::Contact,
        }
    }
}

/// Mobile drawer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Width class of the viewport relative to the mobile breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels.
    pub fn from_width(width: f64) -> Self {
        if width >= MOBILE_BREAKPOINT_PX {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }
}

/// Where a document-level pointer event landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the mobile drawer.
    Menu,
    /// On the drawer's toggle button.
    Toggle,
    /// Anywhere else.
    Outside,
}

/// Navigation state: active section plus mobile drawer.
///
/// Every mutation goes through a transition method so the drawer can never
/// stay open across a navigation or at desktop width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Section,
    menu: MenuState,
    viewport: ViewportClass,
}

impl Navigation {
    /// Initial state: Home, drawer closed, classified for `viewport`.
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            active: Section::Home,
            menu: MenuState::Closed,
            viewport,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Jump to the action's target section and close the drawer.
    ///
    /// Returns `true` when the active section changed.
    pub fn navigate(&mut self, action: NavAction) -> bool {
        let target = action.target();
        let changed = self.active != target;
        self.active = target;
        self.menu = MenuState::Closed;
        changed
    }

    /// Flip the drawer. Stays closed at desktop width.
    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed if self.viewport.is_desktop() => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    /// Close the drawer when a pointer event lands outside it and its toggle.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if self.menu == MenuState::Open && target == PointerTarget::Outside {
            self.menu = MenuState::Closed;
        }
    }

    /// Record a viewport class change. Growing to desktop closes the drawer.
    pub fn viewport_changed(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
        if viewport.is_desktop() {
            self.menu = MenuState::Closed;
        }
    }
}
