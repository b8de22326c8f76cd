//! Interactive node canvas for the workflow builder.
//!
//! All graph edits go through `wf_core::canvas::FlowGraph`; this component
//! only translates pointer input into those calls and renders the result.
//! Nodes are HTML boxes inside a transformed "world" layer, edges are SVG
//! paths in the same layer so both pan and zoom together.

use leptos::ev::{DragEvent, KeyboardEvent, MouseEvent, WheelEvent};
use leptos::html;
use leptos::prelude::*;
use wf_core::canvas::{
    edge_path, palette_item, FlowGraph, NodeKind, Position, Viewport, NODE_HEIGHT, NODE_WIDTH,
};

use crate::components::icons::Icon;
use crate::i18n::use_i18n;

/// MIME type used when dragging palette entries onto the canvas.
pub const PALETTE_MIME: &str = "application/reactflow";

const ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
enum Drag {
    Idle,
    Pan { last: Position, moved: bool },
    Node { id: String, offset: Position },
    Connect { source: String, cursor: Position },
}

#[component]
pub fn FlowCanvas(
    graph: RwSignal<FlowGraph>,
    #[prop(optional)] on_node_click: Option<Callback<String>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let canvas_ref = NodeRef::<html::Div>::new();
    let viewport = RwSignal::new(Viewport::default());
    let drag = RwSignal::new(Drag::Idle);

    // Pointer position relative to the canvas element.
    let local = move |ev: &MouseEvent| -> Position {
        let (left, top) = canvas_ref
            .get_untracked()
            .map(|el| {
                let r = el.get_bounding_client_rect();
                (r.left(), r.top())
            })
            .unwrap_or_default();
        Position::new(ev.client_x() as f64 - left, ev.client_y() as f64 - top)
    };
    let world = move |ev: &MouseEvent| viewport.get_untracked().screen_to_world(local(ev));

    let fit_view = move || {
        let Some(el) = canvas_ref.get_untracked() else {
            return;
        };
        let (w, h) = (el.client_width() as f64, el.client_height() as f64);
        if let Some(bounds) = graph.with_untracked(|g| g.bounds()) {
            viewport.set(Viewport::fit(bounds, w, h));
        }
    };

    // Fit once the element is laid out.
    Effect::new(move |_| {
        if canvas_ref.get().is_some() {
            fit_view();
        }
    });

    let zoom_step = move |factor: f64| {
        let center = canvas_ref
            .get_untracked()
            .map(|el| Position::new(el.client_width() as f64 / 2.0, el.client_height() as f64 / 2.0))
            .unwrap_or_default();
        viewport.update(|v| v.zoom_to(v.zoom * factor, center));
    };

    let on_pane_down = move |ev: MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        drag.set(Drag::Pan { last: local(&ev), moved: false });
    };

    let on_move = move |ev: MouseEvent| {
        let current = drag.get_untracked();
        match current {
            Drag::Idle => {}
            Drag::Pan { last, .. } => {
                let p = local(&ev);
                viewport.update(|v| v.pan_by(p.x - last.x, p.y - last.y));
                drag.set(Drag::Pan { last: p, moved: true });
            }
            Drag::Node { id, offset } => {
                let p = world(&ev);
                graph.update(|g| {
                    let _ = g.move_node(&id, Position::new(p.x - offset.x, p.y - offset.y));
                });
            }
            Drag::Connect { source, .. } => {
                drag.set(Drag::Connect { source, cursor: world(&ev) });
            }
        }
    };

    let on_up = move |_: MouseEvent| {
        if let Drag::Pan { moved: false, .. } = drag.get_untracked() {
            graph.update(|g| g.clear_selection());
        }
        drag.set(Drag::Idle);
    };

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let mouse: &MouseEvent = &ev;
        let anchor = local(mouse);
        viewport.update(|v| v.zoom_by_wheel(ev.delta_y(), anchor));
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(id) = ev.data_transfer().and_then(|dt| dt.get_data(PALETTE_MIME).ok()) else {
            return;
        };
        let Some(item) = palette_item(&id) else {
            leptos::logging::warn!("dropped unknown palette entry {id}");
            return;
        };
        let mouse: &MouseEvent = &ev;
        let p = world(mouse);
        let at = Position::new(p.x - NODE_WIDTH / 2.0, p.y - NODE_HEIGHT / 2.0);
        graph.update(|g| {
            let new_id = g.add_palette_node(item, at);
            let _ = g.select(&new_id);
        });
    };

    let on_key = move |ev: KeyboardEvent| {
        if ev.key() != "Delete" && ev.key() != "Backspace" {
            return;
        }
        let selected = graph.with_untracked(|g| g.selected().map(|n| n.id.clone()));
        if let Some(id) = selected {
            graph.update(|g| {
                let _ = g.remove_node(&id);
            });
        }
    };

    let node_ids = move || graph.with(|g| g.nodes().iter().map(|n| (n.id.clone(), n.kind)).collect::<Vec<_>>());

    let edges = move || {
        graph.with(|g| {
            g.edges()
                .iter()
                .filter_map(|e| {
                    let (s, t) = (g.node(&e.source)?, g.node(&e.target)?);
                    Some((e.id.clone(), edge_path(s.source_anchor(), t.target_anchor())))
                })
                .collect::<Vec<_>>()
        })
    };

    let pending_edge = move || match drag.get() {
        Drag::Connect { source, cursor } => graph
            .with(|g| g.node(&source).map(|n| edge_path(n.source_anchor(), cursor))),
        _ => None,
    };

    view! {
        <div
            class="flow-canvas"
            node_ref=canvas_ref
            tabindex="0"
            on:mousedown=on_pane_down
            on:mousemove=on_move
            on:mouseup=on_up
            on:mouseleave=move |_| drag.set(Drag::Idle)
            on:wheel=on_wheel
            on:dragover=on_drag_over
            on:drop=on_drop
            on:keydown=on_key
        >
            <div class="flow-world" style:transform=move || viewport.get().css_transform()>
                <svg class="flow-edges">
                    <For
                        each=edges
                        key=|edge| edge.clone()
                        children=move |(id, d)| view! {
                            <path
                                class="flow-edge"
                                d=d
                                on:dblclick=move |_| graph.update(|g| {
                                    g.remove_edge(&id);
                                })
                            />
                        }
                    />
                    {move || pending_edge().map(|d| view! { <path class="flow-edge pending" d=d /> })}
                </svg>
                <For
                    each=node_ids
                    key=|(id, _)| id.clone()
                    children=move |(id, kind)| view! { <FlowNodeView graph drag id kind world on_node_click /> }
                />
            </div>

            <div class="flow-controls" on:mousedown=|ev: MouseEvent| ev.stop_propagation()>
                <button class="icon-btn" aria-label=move || i18n.t("builder.canvas.zoomIn") on:click=move |_| zoom_step(ZOOM_STEP)>
                    <Icon name="zoom-in" size=16 />
                </button>
                <button class="icon-btn" aria-label=move || i18n.t("builder.canvas.zoomOut") on:click=move |_| zoom_step(1.0 / ZOOM_STEP)>
                    <Icon name="zoom-out" size=16 />
                </button>
                <button class="icon-btn" aria-label=move || i18n.t("builder.canvas.fitView") on:click=move |_| fit_view()>
                    <Icon name="maximize" size=16 />
                </button>
            </div>
        </div>
    }
}

#[component]
fn FlowNodeView<W>(
    graph: RwSignal<FlowGraph>,
    drag: RwSignal<Drag>,
    id: String,
    kind: NodeKind,
    world: W,
    on_node_click: Option<Callback<String>>,
) -> impl IntoView
where
    W: Fn(&MouseEvent) -> Position + Copy + Send + Sync + 'static,
{
    let node_id = StoredValue::new(id);
    let node = move || graph.with(|g| node_id.with_value(|id| g.node(id).cloned()));
    let style = move || {
        node()
            .map(|n| format!("left: {:.1}px; top: {:.1}px; width: {NODE_WIDTH}px;", n.position.x, n.position.y))
            .unwrap_or_default()
    };
    let label = move || node().map(|n| n.label).unwrap_or_default();
    let selected = move || {
        graph.with(|g| g.selected().map(|n| node_id.with_value(|id| &n.id == id)).unwrap_or(false))
    };

    let on_down = move |ev: MouseEvent| {
        ev.stop_propagation();
        let p = world(&ev);
        let Some(n) = node() else { return };
        let id = node_id.get_value();
        graph.update(|g| {
            let _ = g.select(&id);
        });
        if let Some(cb) = on_node_click {
            cb.run(id.clone());
        }
        drag.set(Drag::Node {
            id,
            offset: Position::new(p.x - n.position.x, p.y - n.position.y),
        });
    };

    let on_source_down = move |ev: MouseEvent| {
        ev.stop_propagation();
        drag.set(Drag::Connect { source: node_id.get_value(), cursor: world(&ev) });
    };

    // Releasing a pending connection anywhere over the node completes it.
    let on_up = move |_: MouseEvent| {
        if let Drag::Connect { source, .. } = drag.get_untracked() {
            let target = node_id.get_value();
            if kind.has_target_handle() && source != target {
                graph.update(|g| {
                    if let Err(e) = g.connect(&source, &target) {
                        leptos::logging::log!("connect ignored: {e}");
                    }
                });
            }
        }
    };

    view! {
        <div
            class=format!("flow-node flow-node-{kind}")
            class:selected=selected
            style=style
            on:mousedown=on_down
            on:mouseup=on_up
        >
            {kind.has_target_handle().then(|| view! { <span class="flow-handle target"></span> })}
            <span class="flow-node-label">{label}</span>
            {kind
                .has_source_handle()
                .then(|| view! { <span class="flow-handle source" on:mousedown=on_source_down></span> })}
        </div>
    }
}
