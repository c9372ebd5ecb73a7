//! The preview region table.
//!
//! One declarative list of every clickable region in the preview, in
//! paint order. Only the Universal Input Bus depends on the document (it
//! shows the first [`BUS_SLOT_LIMIT`] slot types), so a table can be
//! reused for any document with the same leading slot keys.

use tinter_config::{Category, FieldPath, ThemeDocument};

use crate::region::StyleProp::*;
use crate::region::{chrome, graph, slot, RegionSpec};

/// Number of slot types shown on the Universal Input Bus node.
pub const BUS_SLOT_LIMIT: usize = 12;

const MENU_BUTTONS: [&str; 3] = ["Queue Prompt", "Extra Options", "View History"];
const QUEUE_ROWS: usize = 4;
const BATCH_OPTIONS: [&str; 2] = ["Extra", "Auto"];
const LOADER_OUTPUTS: [&str; 3] = ["MODEL", "CLIP", "VAE"];
const SAMPLER_INPUTS: [(&str, &str); 4] = [
    ("model", "MODEL"),
    ("positive", "CONDITIONING"),
    ("negative", "CONDITIONING"),
    ("latent", "LATENT"),
];
const SAMPLER_WIDGETS: [&str; 4] = ["seed", "steps", "cfg", "sampler"];
const BYPASS_INPUTS: [&str; 2] = ["CONTROL_NET", "IMAGE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    regions: Vec<RegionSpec>,
    bus_keys: Vec<String>,
}

impl RegionTable {
    /// Build the table for `document`.
    pub fn for_document(document: &ThemeDocument) -> Self {
        let bus_keys = bus_keys(document);
        let mut regions = Vec::with_capacity(96);

        canvas(&mut regions);
        menu(&mut regions);
        queue(&mut regions);
        group_and_links(&mut regions);
        loader_node(&mut regions);
        sampler_node(&mut regions);
        bus_node(&mut regions, &bus_keys);
        bypassed_node(&mut regions);
        error_node(&mut regions);

        Self { regions, bus_keys }
    }

    /// Whether this table is still valid for `document`.
    pub fn fits(&self, document: &ThemeDocument) -> bool {
        document
            .keys(Category::NodeSlot)
            .into_iter()
            .take(BUS_SLOT_LIMIT)
            .eq(self.bus_keys.iter().map(String::as_str))
    }

    /// The single field a click on `region_id` selects.
    pub fn resolve(&self, region_id: &str) -> Option<&FieldPath> {
        self.get(region_id).map(|r| &r.target)
    }

    pub fn get(&self, region_id: &str) -> Option<&RegionSpec> {
        self.regions.iter().find(|r| r.id == region_id)
    }

    /// Regions that paint anything from `field`.
    pub fn painted_by<'a>(&'a self, field: &FieldPath) -> impl Iterator<Item = &'a RegionSpec> + 'a {
        let field = field.clone();
        self.regions.iter().filter(move |r| r.paints_from(&field))
    }

    /// Slot keys on the Universal Input Bus, in document order.
    pub fn bus_keys(&self) -> &[String] {
        &self.bus_keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionSpec> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a RegionSpec;
    type IntoIter = std::slice::Iter<'a, RegionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

fn bus_keys(document: &ThemeDocument) -> Vec<String> {
    document
        .keys(Category::NodeSlot)
        .into_iter()
        .take(BUS_SLOT_LIMIT)
        .map(str::to_string)
        .collect()
}

// =============================================================================
// APPLICATION CHROME
// =============================================================================

fn canvas(out: &mut Vec<RegionSpec>) {
    out.push(
        RegionSpec::new("canvas", "Background Color", Background, graph("CLEAR_BACKGROUND_COLOR"))
            .paint(Foreground, chrome("fg-color"))
            .paint(GridLine, graph("NODE_DEFAULT_BOXCOLOR")),
    );
}

fn menu(out: &mut Vec<RegionSpec>) {
    out.push(
        RegionSpec::new("menu.bar", "Menu Background", Background, chrome("comfy-menu-bg"))
            .paint(Border, chrome("border-color"))
            .paint(Shadow, chrome("bar-shadow")),
    );
    for (i, label) in MENU_BUTTONS.iter().enumerate() {
        out.push(
            RegionSpec::new(format!("menu.button.{i}"), *label, Background, chrome("content-bg"))
                .paint(Foreground, chrome("content-fg")),
        );
    }
    out.push(RegionSpec::new(
        "menu.settings",
        "Settings",
        Foreground,
        chrome("descrip-text"),
    ));
}

fn queue(out: &mut Vec<RegionSpec>) {
    out.push(
        RegionSpec::new(
            "queue.panel",
            "Secondary Menu Background",
            Background,
            chrome("comfy-menu-secondary-bg"),
        )
        .paint(Border, chrome("border-color")),
    );
    out.push(
        RegionSpec::new("queue.header", "Queue", Foreground, chrome("input-text"))
            .paint(Border, chrome("border-color")),
    );

    for i in 0..QUEUE_ROWS {
        let row_bg = if i % 2 == 0 { "tr-even-bg-color" } else { "tr-odd-bg-color" };
        out.push(
            RegionSpec::new(format!("queue.row.{i}"), "Row Background", Background, chrome(row_bg))
                .paint(Foreground, chrome("input-text")),
        );
        // The first job is running and its pill takes the IMAGE slot color.
        if i == 0 {
            out.push(RegionSpec::new(
                "queue.row.0.status",
                "Running",
                Background,
                slot("IMAGE"),
            ));
        } else {
            out.push(
                RegionSpec::new(
                    format!("queue.row.{i}.status"),
                    "Pending",
                    Foreground,
                    chrome("descrip-text"),
                )
                .paint(Border, chrome("border-color")),
            );
        }
    }

    out.push(
        RegionSpec::new("queue.batch", "Batch Options", Background, chrome("comfy-input-bg"))
            .paint(Border, chrome("border-color"))
            .paint(Foreground, chrome("descrip-text")),
    );
    for (i, label) in BATCH_OPTIONS.iter().enumerate() {
        out.push(RegionSpec::new(
            format!("queue.batch.option.{i}"),
            *label,
            Foreground,
            chrome("input-text"),
        ));
    }
}

// =============================================================================
// GRAPH
// =============================================================================

fn group_and_links(out: &mut Vec<RegionSpec>) {
    out.push(RegionSpec::new(
        "group",
        "Group / Box Color",
        Border,
        graph("NODE_DEFAULT_BOXCOLOR"),
    ));
    out.push(
        RegionSpec::new("group.title", "Workflow Group", Foreground, graph("NODE_TITLE_COLOR"))
            .paint(FontSize, graph("DEFAULT_GROUP_FONT")),
    );

    for i in 0..2 {
        out.push(RegionSpec::new(
            format!("link.standard.{i}"),
            "Link",
            Stroke,
            graph("LINK_COLOR"),
        ));
    }
    out.push(RegionSpec::new(
        "link.connecting",
        "Connecting Link",
        Stroke,
        graph("CONNECTING_LINK_COLOR"),
    ));
    out.push(RegionSpec::new(
        "link.event",
        "Event Link",
        Stroke,
        graph("EVENT_LINK_COLOR"),
    ));
}

/// Colors of a regular node's frame, by `litegraph_base` key.
struct Frame<'a> {
    title_color: &'a str,
    border: &'a str,
    shadow: Option<&'a str>,
}

/// Body, header and title shared by the regular nodes.
fn node_frame(out: &mut Vec<RegionSpec>, node: &str, title: &str, frame: Frame<'_>) {
    let mut body = RegionSpec::new(
        format!("{node}.body"),
        format!("{title} Body"),
        Background,
        graph("NODE_DEFAULT_BGCOLOR"),
    )
    .paint(Border, graph(frame.border))
    .paint(CornerRadius, graph("NODE_DEFAULT_SHAPE"));
    if let Some(shadow) = frame.shadow {
        body = body.paint(Shadow, graph(shadow));
    }
    out.push(body);

    out.push(RegionSpec::new(
        format!("{node}.header"),
        "Node Header Color",
        Background,
        graph("NODE_DEFAULT_COLOR"),
    ));
    out.push(
        RegionSpec::new(format!("{node}.title"), title, Foreground, graph(frame.title_color))
            .paint(FontSize, graph("NODE_TEXT_SIZE")),
    );
}

/// A slot dot plus, if `label_color` is given, its clickable label.
fn slot_pair(out: &mut Vec<RegionSpec>, prefix: &str, name: &str, slot_key: &str, label_color: Option<&str>) {
    out.push(RegionSpec::new(
        format!("{prefix}.{name}.dot"),
        format!("Slot Color: {slot_key}"),
        Background,
        slot(slot_key),
    ));
    if let Some(color) = label_color {
        out.push(
            RegionSpec::new(format!("{prefix}.{name}.label"), name, Foreground, graph(color))
                .paint(FontSize, graph("NODE_SUBTEXT_SIZE")),
        );
    }
}

fn loader_node(out: &mut Vec<RegionSpec>) {
    node_frame(
        out,
        "loader",
        "Load Checkpoint",
        Frame {
            title_color: "NODE_TITLE_COLOR",
            border: "NODE_BOX_OUTLINE_COLOR",
            shadow: Some("DEFAULT_SHADOW_COLOR"),
        },
    );
    out.push(RegionSpec::new(
        "loader.status",
        "Status/Box Color",
        Background,
        graph("NODE_DEFAULT_BOXCOLOR"),
    ));
    out.push(
        RegionSpec::new("loader.widget", "v1-5-pruned-emaonly.ckpt", Background, graph("WIDGET_BGCOLOR"))
            .paint(Foreground, graph("WIDGET_TEXT_COLOR"))
            .paint(Border, graph("WIDGET_OUTLINE_COLOR")),
    );
    for key in LOADER_OUTPUTS {
        slot_pair(out, "loader.out", key, key, Some("NODE_TEXT_COLOR"));
    }
}

fn sampler_node(out: &mut Vec<RegionSpec>) {
    node_frame(
        out,
        "sampler",
        "KSampler (Advanced)",
        Frame {
            title_color: "NODE_SELECTED_TITLE_COLOR",
            border: "NODE_SELECTED_TITLE_COLOR",
            shadow: Some("NODE_SELECTED_TITLE_COLOR"),
        },
    );
    out.push(
        RegionSpec::new("sampler.badge", "12ms", Background, graph("BADGE_BG_COLOR"))
            .paint(Foreground, graph("BADGE_FG_COLOR")),
    );
    for (name, key) in SAMPLER_INPUTS {
        slot_pair(out, "sampler.in", name, key, Some("NODE_TEXT_HIGHLIGHT_COLOR"));
    }
    slot_pair(out, "sampler.out", "LATENT", "LATENT", Some("NODE_TEXT_HIGHLIGHT_COLOR"));

    for widget in SAMPLER_WIDGETS {
        out.push(RegionSpec::new(
            format!("sampler.widget.{widget}.label"),
            widget,
            Foreground,
            graph("WIDGET_SECONDARY_TEXT_COLOR"),
        ));
        out.push(
            RegionSpec::new(
                format!("sampler.widget.{widget}.value"),
                widget,
                Background,
                graph("WIDGET_BGCOLOR"),
            )
            .paint(Border, graph("WIDGET_OUTLINE_COLOR"))
            .paint(Foreground, graph("WIDGET_TEXT_COLOR")),
        );
    }
}

fn bus_node(out: &mut Vec<RegionSpec>, keys: &[String]) {
    node_frame(
        out,
        "bus",
        "Universal Input Bus",
        Frame {
            title_color: "NODE_TITLE_COLOR",
            border: "NODE_BOX_OUTLINE_COLOR",
            shadow: None,
        },
    );
    for key in keys {
        slot_pair(out, "bus.in", key, key, Some("NODE_TEXT_COLOR"));
    }
}

fn bypassed_node(out: &mut Vec<RegionSpec>) {
    out.push(
        RegionSpec::new("bypass.body", "Bypass Color", Background, graph("NODE_BYPASS_BGCOLOR"))
            .paint(Border, graph("NODE_BOX_OUTLINE_COLOR"))
            .paint(CornerRadius, graph("NODE_DEFAULT_SHAPE")),
    );
    for key in BYPASS_INPUTS {
        slot_pair(out, "bypass.in", key, key, None);
    }
}

fn error_node(out: &mut Vec<RegionSpec>) {
    out.push(
        RegionSpec::new("error.body", "Error Color", Border, graph("NODE_ERROR_COLOUR"))
            .paint(Background, graph("NODE_DEFAULT_BGCOLOR"))
            .paint(CornerRadius, graph("NODE_DEFAULT_SHAPE")),
    );
    out.push(RegionSpec::new(
        "error.header",
        "VAE Decode",
        Background,
        graph("NODE_ERROR_COLOUR"),
    ));
    out.push(RegionSpec::new(
        "error.message",
        "Error: VAE not found",
        Foreground,
        graph("NODE_ERROR_COLOUR"),
    ));
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use tinter_config::{apply_edit, presets};

    fn dark_table() -> RegionTable {
        RegionTable::for_document(&presets::load("dark").unwrap())
    }

    #[test]
    fn region_ids_are_unique() {
        let table = dark_table();
        let ids: HashSet<_> = table.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn target_is_always_a_paint_source() {
        for region in &dark_table() {
            assert!(region.paints_from(&region.target), "{}", region.id);
        }
    }

    #[test]
    fn every_paint_source_exists_in_presets() {
        for preset in presets::list() {
            let doc = presets::load(&preset.id).unwrap();
            for region in &RegionTable::for_document(&doc) {
                for paint in &region.paints {
                    assert!(
                        doc.contains(paint.source.category, &paint.source.key),
                        "{} paints missing {}",
                        region.id,
                        paint.source
                    );
                }
            }
        }
    }

    #[test]
    fn resolve_returns_the_clicked_field() {
        let table = dark_table();
        assert_eq!(table.resolve("canvas"), Some(&graph("CLEAR_BACKGROUND_COLOR")));
        assert_eq!(table.resolve("loader.out.MODEL.dot"), Some(&slot("MODEL")));
        assert_eq!(table.resolve("loader.out.MODEL.label"), Some(&graph("NODE_TEXT_COLOR")));
        assert_eq!(table.resolve("loader.header"), Some(&graph("NODE_DEFAULT_COLOR")));
        assert_eq!(table.resolve("loader.title"), Some(&graph("NODE_TITLE_COLOR")));
        assert_eq!(table.resolve("loader.status"), Some(&graph("NODE_DEFAULT_BOXCOLOR")));
        assert_eq!(table.resolve("queue.row.1"), Some(&chrome("tr-odd-bg-color")));
        assert_eq!(table.resolve("queue.row.0.status"), Some(&slot("IMAGE")));
        assert_eq!(table.resolve("sampler.in.positive.dot"), Some(&slot("CONDITIONING")));
        assert_eq!(table.resolve("nowhere"), None);
    }

    #[test]
    fn widget_background_fans_out_to_five_regions() {
        let table = dark_table();
        let field = graph("WIDGET_BGCOLOR");
        let targets: Vec<_> = table
            .iter()
            .filter(|r| r.target == field)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(targets.len(), 5);
        assert_eq!(table.painted_by(&field).count(), 5);
    }

    #[test]
    fn link_color_paints_two_paths() {
        let table = dark_table();
        let ids: Vec<_> = table
            .painted_by(&graph("LINK_COLOR"))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["link.standard.0", "link.standard.1"]);
    }

    #[test]
    fn bus_shows_first_twelve_slots_in_document_order() {
        let doc = presets::load("dark").unwrap();
        let table = RegionTable::for_document(&doc);
        let expected: Vec<_> = doc.keys(Category::NodeSlot)[..BUS_SLOT_LIMIT].to_vec();
        assert_eq!(table.bus_keys(), expected.as_slice());
        assert!(table.get("bus.in.CLIP.dot").is_some());
        assert!(table.get("bus.in.NOISE.dot").is_some());
        assert!(table.get("bus.in.GUIDER.dot").is_none());
    }

    #[test]
    fn edits_keep_the_table_valid() {
        let doc = presets::load("dark").unwrap();
        let table = RegionTable::for_document(&doc);

        let recolored = apply_edit(&doc, Category::NodeSlot, "MODEL", "#000");
        assert!(table.fits(&recolored));

        // Appended keys land after the twelfth slot.
        let extended = apply_edit(&doc, Category::NodeSlot, "UPSCALE_MODEL", "#000");
        assert!(table.fits(&extended));
    }

    #[test]
    fn short_slot_list_shows_everything() {
        let mut doc = presets::load("dark").unwrap();
        let slots = std::sync::Arc::make_mut(&mut doc.colors.node_slot);
        slots.truncate(3);

        let table = RegionTable::for_document(&doc);
        assert_eq!(table.bus_keys(), ["CLIP", "CLIP_VISION", "CLIP_VISION_OUTPUT"]);
        assert!(!dark_table().fits(&doc));
    }

    #[test]
    fn every_visible_category_field_is_clickable() {
        let table = dark_table();
        let targets: HashSet<_> = table.iter().map(|r| r.target.to_string()).collect();
        for key in [
            "CLEAR_BACKGROUND_COLOR",
            "NODE_TITLE_COLOR",
            "NODE_SELECTED_TITLE_COLOR",
            "NODE_TEXT_COLOR",
            "NODE_TEXT_HIGHLIGHT_COLOR",
            "NODE_DEFAULT_COLOR",
            "NODE_DEFAULT_BGCOLOR",
            "NODE_DEFAULT_BOXCOLOR",
            "NODE_BYPASS_BGCOLOR",
            "NODE_ERROR_COLOUR",
            "WIDGET_BGCOLOR",
            "WIDGET_SECONDARY_TEXT_COLOR",
            "LINK_COLOR",
            "EVENT_LINK_COLOR",
            "CONNECTING_LINK_COLOR",
            "BADGE_BG_COLOR",
        ] {
            assert!(targets.contains(&format!("litegraph_base.{key}")), "{key}");
        }
        for key in [
            "comfy-menu-bg",
            "comfy-menu-secondary-bg",
            "comfy-input-bg",
            "content-bg",
            "descrip-text",
            "input-text",
            "tr-even-bg-color",
            "tr-odd-bg-color",
        ] {
            assert!(targets.contains(&format!("comfy_base.{key}")), "{key}");
        }
    }
}
