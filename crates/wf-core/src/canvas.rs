//! Node/edge graph behind the workflow builder canvas.
//!
//! The graph is deliberately permissive: any node may be connected to any
//! other, cycles included. The only rejected edits are edges that already
//! exist and references to nodes that do not.

use std::fmt;

/// Rendered node size in world units. Used for bounds and hit areas.
pub const NODE_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 40.0;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
/// Extra space around the graph bounds when fitting the view.
pub const FIT_PADDING: f64 = 0.1;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ---------------------------------------------------------------------------
// Nodes and edges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Entry node; only a source handle.
    Input,
    /// Both handles.
    Default,
    /// Exit node; only a target handle.
    Output,
}

impl NodeKind {
    pub fn has_source_handle(&self) -> bool {
        !matches!(self, NodeKind::Output)
    }

    pub fn has_target_handle(&self) -> bool {
        !matches!(self, NodeKind::Input)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Input => "input",
            NodeKind::Default => "default",
            NodeKind::Output => "output",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub description: String,
    pub position: Position,
}

impl FlowNode {
    /// Bottom-centre handle where outgoing edges start.
    pub fn source_anchor(&self) -> Position {
        Position::new(self.position.x + NODE_WIDTH / 2.0, self.position.y + NODE_HEIGHT)
    }

    /// Top-centre handle where incoming edges end.
    pub fn target_anchor(&self) -> Position {
        Position::new(self.position.x + NODE_WIDTH / 2.0, self.position.y)
    }
}

/// SVG path data for an edge: a cubic curve leaving `from` downwards and
/// entering `to` from above.
pub fn edge_path(from: Position, to: Position) -> String {
    let bend = ((to.y - from.y).abs() / 2.0).max(30.0);
    format!(
        "M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
        from.x,
        from.y,
        from.x,
        from.y + bend,
        to.x,
        to.y - bend,
        to.x,
        to.y
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl FlowEdge {
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("e{source}-{target}")
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("edge already exists: {0}")]
    DuplicateEdge(String),
}

// ---------------------------------------------------------------------------
// FlowGraph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    selected: Option<String>,
    next_id: u64,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Input → LLM Node → Output, as the builder opens.
    pub fn sample() -> Self {
        let mut g = Self::new();
        let input = g.add_node(NodeKind::Input, "Input", Position::new(250.0, 5.0));
        let llm = g.add_node(NodeKind::Default, "LLM Node", Position::new(250.0, 100.0));
        let output = g.add_node(NodeKind::Output, "Output", Position::new(250.0, 200.0));
        // Fresh ids on an empty graph cannot collide.
        let _ = g.connect(&input, &llm);
        let _ = g.connect(&llm, &output);
        g
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut FlowNode, GraphError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, kind: NodeKind, label: &str, position: Position) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.nodes.push(FlowNode {
            id: id.clone(),
            kind,
            label: label.to_string(),
            description: String::new(),
            position,
        });
        id
    }

    /// Drop a palette entry onto the canvas.
    pub fn add_palette_node(&mut self, item: &PaletteItem, position: Position) -> String {
        self.add_node(NodeKind::Default, item.name, position)
    }

    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    /// Connect `source` to `target`. The new edge id is `e{source}-{target}`.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&FlowEdge, GraphError> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(GraphError::UnknownNode(id.to_string()));
            }
        }
        if self.edges.iter().any(|e| e.source == source && e.target == target) {
            return Err(GraphError::DuplicateEdge(FlowEdge::edge_id(source, target)));
        }
        let idx = self.edges.len();
        self.edges.push(FlowEdge {
            id: FlowEdge::edge_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(&self.edges[idx])
    }

    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<FlowNode, GraphError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        let node = self.nodes.remove(pos);
        self.edges.retain(|e| e.source != id && e.target != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(node)
    }

    pub fn select(&mut self, id: &str) -> Result<(), GraphError> {
        if self.node(id).is_none() {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&FlowNode> {
        self.selected.as_deref().and_then(|id| self.node(id))
    }

    /// "Apply Changes" of the settings panel.
    pub fn update_node(&mut self, id: &str, label: &str, description: &str) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        node.label = label.to_string();
        node.description = description.to_string();
        Ok(())
    }

    /// Smallest rectangle containing every node.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.nodes.first()?;
        let (mut min_x, mut min_y) = (first.position.x, first.position.y);
        let (mut max_x, mut max_y) = (min_x + NODE_WIDTH, min_y + NODE_HEIGHT);
        for n in &self.nodes[1..] {
            min_x = min_x.min(n.position.x);
            min_y = min_y.min(n.position.y);
            max_x = max_x.max(n.position.x + NODE_WIDTH);
            max_y = max_y.max(n.position.y + NODE_HEIGHT);
        }
        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Pan/zoom transform: `screen = world * zoom + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn screen_to_world(&self, p: Position) -> Position {
        Position::new((p.x - self.x) / self.zoom, (p.y - self.y) / self.zoom)
    }

    pub fn world_to_screen(&self, p: Position) -> Position {
        Position::new(p.x * self.zoom + self.x, p.y * self.zoom + self.y)
    }

    /// Set the zoom, clamped, keeping the world point under `anchor` fixed.
    pub fn zoom_to(&mut self, zoom: f64, anchor: Position) {
        let world = self.screen_to_world(anchor);
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.x = anchor.x - world.x * self.zoom;
        self.y = anchor.y - world.y * self.zoom;
    }

    /// Mouse wheel zoom around the cursor.
    pub fn zoom_by_wheel(&mut self, delta_y: f64, anchor: Position) {
        let factor = 2f64.powf(-delta_y * 0.002);
        self.zoom_to(self.zoom * factor, anchor);
    }

    /// Viewport that centres `bounds` in a `width` x `height` pane.
    pub fn fit(bounds: Rect, width: f64, height: f64) -> Self {
        let padded_w = bounds.width * (1.0 + FIT_PADDING);
        let padded_h = bounds.height * (1.0 + FIT_PADDING);
        let zoom = if padded_w <= 0.0 || padded_h <= 0.0 {
            MAX_ZOOM
        } else {
            (width / padded_w).min(height / padded_h)
        }
        .clamp(MIN_ZOOM, MAX_ZOOM);
        let cx = bounds.x + bounds.width / 2.0;
        let cy = bounds.y + bounds.height / 2.0;
        Self {
            x: width / 2.0 - cx * zoom,
            y: height / 2.0 - cy * zoom,
            zoom,
        }
    }

    /// CSS `transform` for the world layer.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            self.x, self.y, self.zoom
        )
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [PaletteItem],
}

const fn item(id: &'static str, name: &'static str, icon: &'static str) -> PaletteItem {
    PaletteItem { id, name, icon }
}

pub const PALETTE: [PaletteCategory; 4] = [
    PaletteCategory {
        key: "llm",
        title: "LLM",
        icon: "message-square",
        items: &[
            item("llm-1", "Text Generation", "type"),
            item("llm-2", "Chat", "message-circle"),
            item("llm-3", "Summarize", "file-text"),
        ],
    },
    PaletteCategory {
        key: "data",
        title: "Data Processing",
        icon: "database",
        items: &[
            item("data-1", "CSV Parser", "file-spreadsheet"),
            item("data-2", "JSON Transform", "braces"),
            item("data-3", "Filter", "filter"),
        ],
    },
    PaletteCategory {
        key: "connectors",
        title: "Connectors",
        icon: "plug",
        items: &[
            item("conn-1", "REST API", "globe"),
            item("conn-2", "Database", "database"),
            item("conn-3", "Storage", "hard-drive"),
        ],
    },
    PaletteCategory {
        key: "logic",
        title: "Logic",
        icon: "git-branch",
        items: &[
            item("logic-1", "If/Else", "git-fork"),
            item("logic-2", "Switch", "route"),
            item("logic-3", "Loop", "repeat"),
        ],
    },
];

pub fn palette_item(id: &str) -> Option<&'static PaletteItem> {
    PALETTE.iter().flat_map(|c| c.items.iter()).find(|i| i.id == id)
}

/// Palette entries whose name contains `query` (case-insensitive).
/// Categories left without entries are dropped.
pub fn filter_palette(query: &str) -> Vec<(&'static PaletteCategory, Vec<&'static PaletteItem>)> {
    let needle = query.trim().to_lowercase();
    PALETTE
        .iter()
        .filter_map(|cat| {
            let items: Vec<_> = cat
                .items
                .iter()
                .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
                .collect();
            (!items.is_empty()).then_some((cat, items))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Settings panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeSettingsTab {
    #[default]
    Input,
    Output,
    LlmParams,
}

impl NodeSettingsTab {
    pub const ALL: [NodeSettingsTab; 3] = [
        NodeSettingsTab::Input,
        NodeSettingsTab::Output,
        NodeSettingsTab::LlmParams,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            NodeSettingsTab::Input => "builder.settings.input",
            NodeSettingsTab::Output => "builder.settings.output",
            NodeSettingsTab::LlmParams => "builder.settings.llmParams",
        }
    }
}

/// Input type and output format choices.
pub const IO_FORMATS: [(&str, &str); 3] = [("text", "Text"), ("json", "JSON"), ("file", "File")];

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_path_runs_between_handles() {
        let g = FlowGraph::sample();
        let (a, b) = (g.node("1").unwrap(), g.node("2").unwrap());
        let d = edge_path(a.source_anchor(), b.target_anchor());
        assert_eq!(d, "M 325.0 45.0 C 325.0 75.0, 325.0 70.0, 325.0 100.0");
    }

    #[test]
    fn sample_graph_is_a_chain() {
        let g = FlowGraph::sample();
        assert_eq!(g.nodes().len(), 3);
        let ids: Vec<_> = g.edges().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1-2", "e2-3"]);
        assert_eq!(g.nodes()[0].kind, NodeKind::Input);
        assert_eq!(g.nodes()[2].kind, NodeKind::Output);
    }

    #[test]
    fn connect_names_edge_and_rejects_duplicates() {
        let mut g = FlowGraph::sample();
        let edge = g.connect("1", "3").unwrap();
        assert_eq!(edge.id, "e1-3");
        assert_eq!(
            g.connect("1", "3"),
            Err(GraphError::DuplicateEdge("e1-3".into()))
        );
        assert_eq!(g.connect("1", "9"), Err(GraphError::UnknownNode("9".into())));
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn cycles_are_allowed() {
        let mut g = FlowGraph::sample();
        assert!(g.connect("3", "1").is_ok());
    }

    #[test]
    fn removing_a_node_drops_incident_edges_and_selection() {
        let mut g = FlowGraph::sample();
        g.select("2").unwrap();
        let removed = g.remove_node("2").unwrap();
        assert_eq!(removed.label, "LLM Node");
        assert!(g.edges().is_empty());
        assert!(g.selected().is_none());
        assert!(g.remove_node("2").is_err());
    }

    #[test]
    fn new_nodes_get_fresh_ids() {
        let mut g = FlowGraph::sample();
        g.remove_node("3").unwrap();
        let id = g.add_palette_node(palette_item("logic-3").unwrap(), Position::new(10.0, 10.0));
        assert_eq!(id, "4");
        assert_eq!(g.node("4").map(|n| n.label.as_str()), Some("Loop"));
    }

    #[test]
    fn update_and_move() {
        let mut g = FlowGraph::sample();
        g.update_node("2", "Summarizer", "condenses text").unwrap();
        g.move_node("2", Position::new(400.0, 120.0)).unwrap();
        let n = g.node("2").unwrap();
        assert_eq!(n.label, "Summarizer");
        assert_eq!(n.position, Position::new(400.0, 120.0));
        assert!(g.move_node("x", Position::default()).is_err());
    }

    #[test]
    fn bounds_cover_node_boxes() {
        let b = FlowGraph::sample().bounds().unwrap();
        assert_eq!(b, Rect { x: 250.0, y: 5.0, width: 150.0, height: 235.0 });
        assert!(FlowGraph::new().bounds().is_none());
    }

    #[test]
    fn zoom_is_clamped_and_anchored() {
        let mut vp = Viewport::default();
        let anchor = Position::new(100.0, 50.0);
        let world = vp.screen_to_world(anchor);
        vp.zoom_to(10.0, anchor);
        assert_eq!(vp.zoom, MAX_ZOOM);
        let after = vp.world_to_screen(world);
        assert!((after.x - anchor.x).abs() < 1e-9 && (after.y - anchor.y).abs() < 1e-9);
        vp.zoom_to(0.01, anchor);
        assert_eq!(vp.zoom, MIN_ZOOM);
        vp.zoom_by_wheel(-100.0, anchor);
        assert!(vp.zoom > MIN_ZOOM);
    }

    #[test]
    fn fit_centres_padded_bounds() {
        let bounds = Rect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };
        let vp = Viewport::fit(bounds, 220.0, 440.0);
        assert!((vp.zoom - 2.0).abs() < 1e-9);
        assert!((vp.x - 10.0).abs() < 1e-9);
        assert!((vp.y - 120.0).abs() < 1e-9);

        let huge = Rect { x: 0.0, y: 0.0, width: 10_000.0, height: 10.0 };
        assert_eq!(Viewport::fit(huge, 500.0, 500.0).zoom, MIN_ZOOM);
    }

    #[test]
    fn palette_search_drops_empty_categories() {
        let hits = filter_palette("data");
        let keys: Vec<_> = hits.iter().map(|(c, _)| c.key).collect();
        assert_eq!(keys, vec!["connectors"]);
        assert_eq!(filter_palette("").len(), 4);
        assert!(filter_palette("zzz").is_empty());
    }
}
