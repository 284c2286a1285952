//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The content table is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Services, solutions, clients, partners and about panels.
pub const CONTENT_TOML: &str = include_str!("../assets/content.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Id of the root element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Company name shown in the hero and footer.
pub const APP_NAME: &str = "Compsoft Communications";

/// Hero subtitle.
pub const APP_TAGLINE: &str = "Leading IT Solutions Provider";

/// Hero description.
pub const APP_DESCRIPTION: &str = "Comprehensive end-to-end ICT solutions to businesses across \
     Southern Africa using best-of-breed technologies.";

/// About page introduction.
pub const ABOUT_INTRO: &str = "Compsoft Communications is a leading ICT solutions and service \
     provider in Namibia. We are dedicated to delivering innovative and reliable technology \
     solutions that empower businesses to thrive in the digital age.";

/// Company logo shown in the navigation bar.
pub const LOGO_URL: &str = "https://ik.imagekit.io/1ejspnv0y/image001.jpg?updatedAt=1757199327281";

/// Hero background videos, in preference order.
pub const HERO_VIDEOS: &[&str] = &[
    "https://videos.pexels.com/video-files/3195394/3195394-uhd_2560_1440_25fps.mp4",
    "https://videos.pexels.com/video-files/5011647/5011647-uhd_2560_1440_30fps.mp4",
];

// =============================================================================
// Contact Details
// =============================================================================

pub mod contact {
    pub const EMAIL: &str = "info@compsoftcommunications.com";
    /// Phone number as dialed (`tel:` link target).
    pub const PHONE: &str = "+264851788637";
    /// Phone number as displayed.
    pub const PHONE_DISPLAY: &str = "+264 85 178 8637";
    pub const ADDRESS: &str = "NO. 4 Adler Street, Windhoek, Namibia";
    pub const PO_BOX: &str = "P.O. Box 1234, Windhoek, Namibia";
    /// Business hours, one line per day range.
    pub const HOURS: &[&str] = &[
        "Monday - Friday: 8:00 AM to 5:00 PM",
        "Saturday: 9:00 AM to 1:00 PM",
        "Sunday: Closed",
    ];
}

// =============================================================================
// Contact Form Configuration
// =============================================================================

/// Upper bound on a single submission before it is reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Latency of the simulated delivery collaborator.
pub const SIMULATED_DELIVERY_MS: u32 = 1_000;

/// How long a success/failure notice stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Optional HTTP endpoint for contact messages (e.g. a Formspree form URL).
///
/// Set `CONTACT_ENDPOINT` at build time to deliver over HTTP; otherwise the
/// simulated collaborator is used.
pub const CONTACT_ENDPOINT: Option<&str> = option_env!("CONTACT_ENDPOINT");

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewport width (CSS px) at and above which the desktop layout applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Media query matching the desktop layout.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

// =============================================================================
// Animation Configuration
// =============================================================================

/// Smooth-scroll engine options.
pub mod smooth_scroll {
    pub const LERP: f64 = 0.08;
    pub const DURATION: f64 = 1.2;
    pub const SMOOTH_WHEEL: bool = true;
    pub const SMOOTH_TOUCH: bool = true;
}

/// Section enter/leave animation.
pub mod section_anim {
    /// Initial downward offset in px.
    pub const OFFSET_Y: f64 = 60.0;
    pub const DURATION: f64 = 1.2;
    pub const EASE: &str = "power3.out";
    /// Trigger when the element top reaches this percentage of viewport height.
    pub const START_PERCENT: f64 = 85.0;
}

/// Card enter/leave animation.
pub mod card_anim {
    pub const OFFSET_Y: f64 = 50.0;
    pub const SCALE: f64 = 0.95;
    pub const DURATION: f64 = 0.8;
    pub const EASE: &str = "power2.out";
    pub const START_PERCENT: f64 = 90.0;
    /// Delay added per card position, in seconds.
    pub const STAGGER: f64 = 0.1;
}

/// Hero parallax magnitudes (yPercent) and scrub smoothing.
pub mod parallax {
    pub const DESKTOP_TITLE: f64 = -25.0;
    pub const DESKTOP_SUBTITLE: f64 = -15.0;
    pub const DESKTOP_SCRUB: f64 = 1.0;
    pub const MOBILE_TITLE: f64 = -10.0;
    pub const MOBILE_SUBTITLE: f64 = -5.0;
    pub const MOBILE_SCRUB: f64 = 0.5;
}

/// Hero intro tweens played once when the hero is rendered.
pub mod hero_intro {
    pub const DURATION: f64 = 0.8;
    pub const TITLE_SCALE: f64 = 0.8;
    pub const TITLE_DELAY: f64 = 0.3;
    pub const OFFSET_Y: f64 = 30.0;
    pub const SUBTITLE_DELAY: f64 = 0.5;
    pub const DESCRIPTION_DELAY: f64 = 0.6;
    pub const CTA_DELAY: f64 = 0.9;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
