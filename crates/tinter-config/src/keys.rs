//! Baseline key sets for each category.
//!
//! These lists drive default population and required-key checks only. A
//! document may carry more keys than listed here; they are preserved.

use crate::category::Category;

/// Required `node_slot` keys, in canonical order.
pub const NODE_SLOT_KEYS: &[&str] = &[
    "CLIP",
    "CLIP_VISION",
    "CLIP_VISION_OUTPUT",
    "CONDITIONING",
    "CONTROL_NET",
    "IMAGE",
    "LATENT",
    "MASK",
    "MODEL",
    "STYLE_MODEL",
    "VAE",
    "NOISE",
    "GUIDER",
    "SAMPLER",
    "SIGMAS",
    "TAESD",
];

/// Required `litegraph_base` keys, in canonical order.
pub const LITEGRAPH_BASE_KEYS: &[&str] = &[
    "BACKGROUND_IMAGE",
    "CLEAR_BACKGROUND_COLOR",
    "NODE_TITLE_COLOR",
    "NODE_SELECTED_TITLE_COLOR",
    "NODE_TEXT_SIZE",
    "NODE_TEXT_COLOR",
    "NODE_TEXT_HIGHLIGHT_COLOR",
    "NODE_SUBTEXT_SIZE",
    "NODE_DEFAULT_COLOR",
    "NODE_DEFAULT_BGCOLOR",
    "NODE_DEFAULT_BOXCOLOR",
    "NODE_DEFAULT_SHAPE",
    "NODE_BOX_OUTLINE_COLOR",
    "NODE_BYPASS_BGCOLOR",
    "NODE_ERROR_COLOUR",
    "DEFAULT_SHADOW_COLOR",
    "DEFAULT_GROUP_FONT",
    "WIDGET_BGCOLOR",
    "WIDGET_OUTLINE_COLOR",
    "WIDGET_TEXT_COLOR",
    "WIDGET_SECONDARY_TEXT_COLOR",
    "WIDGET_DISABLED_TEXT_COLOR",
    "LINK_COLOR",
    "EVENT_LINK_COLOR",
    "CONNECTING_LINK_COLOR",
    "BADGE_FG_COLOR",
    "BADGE_BG_COLOR",
];

/// Required `comfy_base` keys, in canonical order.
pub const COMFY_BASE_KEYS: &[&str] = &[
    "fg-color",
    "bg-color",
    "comfy-menu-bg",
    "comfy-menu-secondary-bg",
    "comfy-input-bg",
    "input-text",
    "descrip-text",
    "drag-text",
    "error-text",
    "border-color",
    "tr-even-bg-color",
    "tr-odd-bg-color",
    "content-bg",
    "content-fg",
    "content-hover-bg",
    "content-hover-fg",
    "bar-shadow",
];

/// `litegraph_base` fields that are never edited through a color control.
pub const NON_COLOR_FIELDS: &[&str] = &["NODE_DEFAULT_SHAPE", "BACKGROUND_IMAGE"];

/// The baseline key list for a category.
pub fn required_keys(category: Category) -> &'static [&'static str] {
    match category {
        Category::NodeSlot => NODE_SLOT_KEYS,
        Category::LitegraphBase => LITEGRAPH_BASE_KEYS,
        Category::ComfyBase => COMFY_BASE_KEYS,
    }
}

/// Whether a field is excluded from color-only editing surfaces by name.
pub fn is_non_color_field(category: Category, key: &str) -> bool {
    category == Category::LitegraphBase && NON_COLOR_FIELDS.contains(&key)
}
