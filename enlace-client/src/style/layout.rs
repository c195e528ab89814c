//! Layout constants for consistent UI appearance
//!
//! Numeric constants for dimensions, sizes, spacing, and padding.
//! Window constants are in the `window` module.

// ============================================================================
// Padding
// ============================================================================

/// Text input field padding
pub const INPUT_PADDING: f32 = 8.0;

/// Button padding
pub const BUTTON_PADDING: f32 = 10.0;

/// Content area padding
pub const CONTENT_PADDING: f32 = 24.0;

/// Card padding
pub const CARD_PADDING: f32 = 16.0;

/// Sidebar padding
pub const SIDEBAR_PADDING: f32 = 16.0;

/// Header padding
pub const HEADER_PADDING: iced::Padding = iced::Padding {
    top: 12.0,
    right: CONTENT_PADDING,
    bottom: 12.0,
    left: CONTENT_PADDING,
};

/// Sidebar link padding
pub const NAV_LINK_PADDING: iced::Padding = iced::Padding {
    top: 8.0,
    right: 12.0,
    bottom: 8.0,
    left: 12.0,
};

/// Tooltip padding (space around the tooltip text)
pub const TOOLTIP_PADDING: f32 = 4.0;

/// Tooltip background padding
pub const TOOLTIP_BACKGROUND_PADDING: f32 = 6.0;

/// Tooltip gap (distance between element and tooltip)
pub const TOOLTIP_GAP: f32 = 5.0;

/// Calendar day cell padding
pub const CALENDAR_CELL_PADDING: f32 = 4.0;

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing between elements
pub const ELEMENT_SPACING: f32 = 10.0;

/// Small spacing
pub const SMALL_SPACING: f32 = 5.0;

/// Spacing between dashboard cards
pub const SECTION_SPACING: f32 = 20.0;

/// Sidebar link spacing
pub const NAV_SPACING: f32 = 4.0;

/// Large spacer
pub const SPACER_SIZE_LARGE: f32 = 20.0;

// ============================================================================
// Dimensions
// ============================================================================

/// Sidebar width
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// HR sub-navigation width
pub const SUB_NAV_WIDTH: f32 = 220.0;

/// Avatar circle size
pub const AVATAR_SIZE: f32 = 64.0;

/// Maximum width of form content
pub const FORM_MAX_WIDTH: f32 = 640.0;

/// Maximum width of the modal dialog
pub const MODAL_MAX_WIDTH: f32 = 560.0;

/// Height of the description editor
pub const DESCRIPTION_EDITOR_HEIGHT: f32 = 220.0;

/// Width of the notifications dropdown
pub const NOTIFICATIONS_WIDTH: f32 = 320.0;

/// Calendar day cell width
pub const CALENDAR_CELL_WIDTH: f32 = 36.0;

/// Carousel slide height
pub const CAROUSEL_HEIGHT: f32 = 140.0;

/// Gallery thumbnail height
pub const GALLERY_THUMBNAIL_HEIGHT: f32 = 96.0;

/// Gallery picture height inside the modal
pub const GALLERY_PICTURE_HEIGHT: f32 = 280.0;

/// Carousel dot size
pub const CAROUSEL_DOT_SIZE: f32 = 12.0;

/// Border width
pub const BORDER_WIDTH: f32 = 1.0;

/// Standard border radius
pub const STANDARD_BORDER_RADIUS: f32 = 6.0;

// ============================================================================
// Font Sizes
// ============================================================================

/// Standard text size
pub const TEXT_SIZE: f32 = 14.0;

/// Small text size
pub const SMALL_TEXT_SIZE: f32 = 12.0;

/// Panel title size
pub const TITLE_SIZE: f32 = 22.0;

/// Card heading size
pub const HEADING_SIZE: f32 = 17.0;

/// Avatar initial size
pub const AVATAR_TEXT_SIZE: f32 = 28.0;

/// Tooltip text size
pub const TOOLTIP_TEXT_SIZE: f32 = 12.0;
