//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconName;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuBriefcase as BusinessCenter, LuCheck as Check,
        LuChevronDown as ChevronDown, LuCircleAlert as Alert, LuCircleCheck as Success,
        LuClock as Clock, LuCloud as Cloud, LuCloudCog as CloudSync, LuDatabase as Database,
        LuEye as Vision, LuGlobe as Network, LuHeadset as SupportAgent, LuLock as VpnLock,
        LuMail as Mail, LuMapPin as Location, LuMenu as Menu, LuNetwork as Lan,
        LuPhone as Phone, LuPhoneCall as SettingsPhone, LuRouter as Router,
        LuServer as Dns, LuShieldCheck as Security, LuTarget as Mission, LuUsers as Groups,
        LuWifi as Wifi, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBriefcase as BusinessCenter, BsBullseye as Mission,
        BsCheckCircle as Success, BsCheckLg as Check, BsChevronDown as ChevronDown,
        BsClock as Clock, BsCloud as Cloud, BsCloudArrowUp as CloudSync,
        BsDatabase as Database, BsDiagram3 as Lan, BsEnvelope as Mail,
        BsExclamationCircle as Alert, BsEye as Vision, BsGeoAlt as Location,
        BsGlobe as Network, BsHddNetwork as Dns, BsHeadset as SupportAgent, BsList as Menu,
        BsPeople as Groups, BsRouter as Router, BsShieldCheck as Security,
        BsShieldLock as VpnLock, BsTelephone as Phone, BsTelephoneForward as SettingsPhone,
        BsWifi as Wifi, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Interface
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CHECK, Check);
themed_icon!(SUCCESS, Success);
themed_icon!(ALERT, Alert);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);
themed_icon!(CLOCK, Clock);

// Content
themed_icon!(WIFI, Wifi);
themed_icon!(GROUPS, Groups);
themed_icon!(DATABASE, Database);
themed_icon!(SECURITY, Security);
themed_icon!(LAN, Lan);
themed_icon!(SUPPORT_AGENT, SupportAgent);
themed_icon!(ROUTER, Router);
themed_icon!(SETTINGS_PHONE, SettingsPhone);
themed_icon!(BUSINESS_CENTER, BusinessCenter);
themed_icon!(VPN_LOCK, VpnLock);
themed_icon!(DNS, Dns);
themed_icon!(CLOUD_SYNC, CloudSync);
themed_icon!(CLOUD, Cloud);
themed_icon!(VISION, Vision);
themed_icon!(MISSION, Mission);
themed_icon!(NETWORK, Network);

/// Icon for a content table icon name.
pub fn content_icon(name: IconName) -> Icon {
    match name {
        IconName::Wifi => WIFI,
        IconName::Groups => GROUPS,
        IconName::Database => DATABASE,
        IconName::Security => SECURITY,
        IconName::Lan => LAN,
        IconName::SupportAgent => SUPPORT_AGENT,
        IconName::Router => ROUTER,
        IconName::SettingsPhone => SETTINGS_PHONE,
        IconName::BusinessCenter => BUSINESS_CENTER,
        IconName::VpnLock => VPN_LOCK,
        IconName::Dns => DNS,
        IconName::CloudSync => CLOUD_SYNC,
        IconName::Cloud => CLOUD,
        IconName::Vision => VISION,
        IconName::Mission => MISSION,
        IconName::Network => NETWORK,
    }
}
