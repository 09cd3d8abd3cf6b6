use std::collections::BTreeMap;

use foundation::math::{GeoPoint, Vec2};
use tracing::debug;

use formats::coordinates::CoordinateIndex;
use formats::dataset::{CityRecord, CountryRecord, has_value};
use formats::topology::{TopologyError, WorldTopology};
use globe::culling::cull_markers;
use globe::path::project_polygons;
use globe::projection::Orthographic;
use globe::rotation::Rotation;
use globe::viewport::Viewport;
use interact::drag::DragController;
use interact::hover::{HIT_RADIUS_PX, HoverTracker, HoverTransition, MarkerPoint, hit_test};
use interact::state::{Cursor, InteractionState};
use runtime::frame::Frame;
use runtime::generation::{Generation, Generations};
use runtime::ticker::Ticker;
use symbology::metrics::{MetricKey, config};
use symbology::scale::{Domain, SequentialScale};
use symbology::schemes::{NEUTRAL_FILL, Rgba, darken};

use crate::scene::{
    CountryPath, Disc, FrameScene, MARKER_EMPHASIS_STROKE, MARKER_EMPHASIZED_RADIUS_PX,
    MARKER_RADIUS_PX, MARKER_STROKE, MarkerSprite,
};

/// Idle auto-rotation, degrees of yaw per animation tick.
pub const IDLE_STEP_DEG: f64 = 0.1;

/// Hover transition reported to the host: the container-relative pointer
/// position and the hovered record, or `None` on leave.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEvent {
    pub position: Vec2,
    pub record: Option<CityRecord>,
}

/// A city that takes part in rendering: it has a coordinate and a value
/// for the active metric. Rebuilt on every draw setup.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Marker {
    city_index: usize,
    coordinate: GeoPoint,
    value: f64,
}

/// The globe render controller.
///
/// Owns rotation state for its whole lifetime (a dataset reload, metric
/// switch, or resize never resets it) and applies discrete commands
/// (`tick`, `rotate_by`, `set_metric`, `resize`, pointer events), each
/// followed by an explicit synchronous redraw of the retained scene.
///
/// Dataset, metric, and viewport changes are full draw setups: derived
/// scales and marker sets are rebuilt whole, the animation loop restarts,
/// and a new draw generation begins. The world topology arrives
/// asynchronously; a result is applied only while its generation is still
/// current, so a stale load can never overwrite newer state.
pub struct GlobeView {
    rotation: Rotation,
    viewport: Viewport,
    metric: MetricKey,

    cities: Vec<CityRecord>,
    countries: Vec<CountryRecord>,
    country_lookup: BTreeMap<String, usize>,
    coordinates: CoordinateIndex,
    topology: Option<WorldTopology>,

    markers: Vec<Marker>,
    scale: SequentialScale,

    generations: Generations,
    ticker: Ticker,
    drag: DragController,
    hover: HoverTracker,
    state: InteractionState,

    scene: FrameScene,
    last_pointer: Vec2,
    hover_handler: Option<Box<dyn FnMut(HoverEvent)>>,
}

impl GlobeView {
    pub fn new(viewport: Viewport) -> Self {
        let cfg = config(MetricKey::default());
        let mut view = Self {
            rotation: Rotation::default(),
            viewport,
            metric: MetricKey::default(),
            cities: Vec::new(),
            countries: Vec::new(),
            country_lookup: BTreeMap::new(),
            coordinates: CoordinateIndex::default(),
            topology: None,
            markers: Vec::new(),
            scale: SequentialScale::new(cfg.scheme, Domain::FALLBACK, cfg.reversed),
            generations: Generations::new(),
            ticker: Ticker::default(),
            drag: DragController::new(),
            hover: HoverTracker::new(),
            state: InteractionState::default(),
            scene: FrameScene::empty(Cursor::Grab),
            last_pointer: Vec2::new(0.0, 0.0),
            hover_handler: None,
        };
        view.draw_setup();
        view
    }

    pub fn set_hover_handler<F>(&mut self, handler: F)
    where
        F: FnMut(HoverEvent) + 'static,
    {
        self.hover_handler = Some(Box::new(handler));
    }

    /// Replace both datasets and the coordinate table. Returns the draw
    /// generation whose topology result will be accepted.
    pub fn set_datasets(
        &mut self,
        cities: Vec<CityRecord>,
        countries: Vec<CountryRecord>,
        coordinates: CoordinateIndex,
    ) -> Generation {
        self.country_lookup = countries
            .iter()
            .enumerate()
            .map(|(index, record)| (record.country.clone(), index))
            .collect();
        self.cities = cities;
        self.countries = countries;
        self.coordinates = coordinates;
        self.draw_setup()
    }

    /// Switch the active metric. Color domains are recomputed from the
    /// current dataset, never reused from the previous metric.
    pub fn set_metric(&mut self, metric: MetricKey) -> Generation {
        if metric == self.metric {
            return self.generations.current();
        }
        self.metric = metric;
        self.draw_setup()
    }

    /// Apply a container width change. Zero/negative transient widths are
    /// ignored and return `None`.
    pub fn resize(&mut self, width: f64) -> Option<Generation> {
        let viewport = self.viewport.with_width(width)?;
        self.viewport = viewport;
        Some(self.draw_setup())
    }

    /// Deliver a decoded topology. Applied (and drawn) only while its
    /// generation is still current; stale results are discarded.
    pub fn topology_loaded(&mut self, generation: Generation, topology: WorldTopology) -> bool {
        if !self.generations.is_current(generation) {
            debug!(generation = generation.0, "discarding stale topology result");
            return false;
        }
        debug!(countries = topology.countries.len(), "topology applied");
        self.topology = Some(topology);
        self.redraw();
        true
    }

    /// Silent degrade: the globe stays undrawn. No retry, no user surface.
    pub fn topology_failed(&self, generation: Generation, error: &TopologyError) {
        debug!(generation = generation.0, %error, "topology load failed");
    }

    /// One animation frame. While a drag session is open the tick is a
    /// rotation no-op; otherwise it advances yaw by the idle step and
    /// redraws.
    pub fn tick(&mut self) -> Option<Frame> {
        let frame = self.ticker.tick()?;
        if !self.drag.is_dragging() {
            self.rotation.rotate_by(IDLE_STEP_DEG, 0.0);
            self.redraw();
        }
        Some(frame)
    }

    /// Stop the animation loop on teardown. Subsequent ticks are no-ops
    /// until the next full draw setup restarts the loop.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Explicit rotation command.
    pub fn rotate_by(&mut self, d_yaw_deg: f64, d_pitch_deg: f64) {
        self.rotation.rotate_by(d_yaw_deg, d_pitch_deg);
        self.redraw();
    }

    pub fn pointer_down(&mut self, pointer: Vec2) {
        self.last_pointer = pointer;
        if self.hover.clear().is_some() {
            self.state = self.state.on_marker_leave();
            self.emit_hover(None);
        }
        self.state = self.state.on_pointer_down();
        self.drag.pointer_down(pointer);
        self.redraw();
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.last_pointer = pointer;
        if self.drag.is_dragging() {
            // Drag owns rotation; hover stays suppressed for the session.
            if let Some(delta) = self.drag.pointer_move(pointer) {
                self.rotation.rotate_by(delta.d_yaw_deg, delta.d_pitch_deg);
                self.redraw();
            }
            return;
        }

        let points: Vec<MarkerPoint> = self
            .scene
            .markers
            .iter()
            .filter_map(|m| {
                Some(MarkerPoint {
                    index: m.index,
                    position: m.position?,
                })
            })
            .collect();
        let hit = hit_test(&points, pointer, HIT_RADIUS_PX);
        let transitions = self.hover.update(hit);
        if transitions.is_empty() {
            return;
        }
        self.apply_hover_transitions(transitions);
        self.redraw();
    }

    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up() {
            self.state = self.state.on_pointer_up();
            self.redraw();
        }
    }

    /// Pointer left the container: ends any drag session and any hover.
    pub fn pointer_leave(&mut self) {
        if self.drag.pointer_up() {
            self.state = self.state.on_pointer_up();
        }
        if self.hover.clear().is_some() {
            self.state = self.state.on_marker_leave();
            self.emit_hover(None);
        }
        self.redraw();
    }

    pub fn scene(&self) -> &FrameScene {
        &self.scene
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn metric(&self) -> MetricKey {
        self.metric
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor()
    }

    pub fn has_topology(&self) -> bool {
        self.topology.is_some()
    }

    pub fn pending_generation(&self) -> Generation {
        self.generations.current()
    }

    pub fn scale(&self) -> &SequentialScale {
        &self.scale
    }

    pub fn hovered_city(&self) -> Option<&CityRecord> {
        let slot = self.hover.current()?;
        let marker = self.markers.get(slot)?;
        self.cities.get(marker.city_index)
    }

    /// Low/mid/high samples of the active scheme for the legend ramp.
    pub fn legend_ramp(&self) -> [Rgba; 3] {
        [
            self.scale.ramp(0.0),
            self.scale.ramp(0.5),
            self.scale.ramp(1.0),
        ]
    }

    /// Full draw setup: rebuild derived scales and the marker set, drop
    /// the previous topology, restart the animation loop, begin a new
    /// draw generation. Rotation is deliberately untouched.
    fn draw_setup(&mut self) -> Generation {
        let generation = self.generations.begin();
        self.topology = None;

        let cfg = config(self.metric);
        let domain = Domain::from_values(self.cities.iter().map(|c| (cfg.city_value)(c)));
        self.scale = SequentialScale::new(cfg.scheme, domain, cfg.reversed);

        let coordinates = &self.coordinates;
        let markers: Vec<Marker> = self
            .cities
            .iter()
            .enumerate()
            .filter_map(|(city_index, record)| {
                let coordinate = coordinates.get(&record.city)?;
                let value = (cfg.city_value)(record);
                has_value(value).then_some(Marker {
                    city_index,
                    coordinate,
                    value,
                })
            })
            .collect();
        self.markers = markers;

        // Marker slots changed; any hover is stale now.
        if self.hover.clear().is_some() {
            self.state = self.state.on_marker_leave();
            self.emit_hover(None);
        }

        self.ticker.restart();
        debug!(
            generation = generation.0,
            markers = self.markers.len(),
            "draw setup"
        );
        self.redraw();
        generation
    }

    /// Recompute and reassign every shape's screen position and color
    /// from current state.
    fn redraw(&mut self) {
        let globe_size = self.viewport.globe_size();
        if !(globe_size > 0.0) {
            self.scene = FrameScene::empty(self.state.cursor());
            return;
        }
        let center = self.viewport.center();
        let projection = Orthographic::new(globe_size, center, self.rotation);

        let coordinates: Vec<GeoPoint> = self.markers.iter().map(|m| m.coordinate).collect();
        let visible = cull_markers(&projection, &coordinates);

        // A hovered marker that rotated past the horizon (or lost its
        // geometry) leaves before the scene is rebuilt.
        if let Some(slot) = self.hover.current() {
            let still_there =
                self.topology.is_some() && visible.get(slot).copied().unwrap_or(false);
            if !still_there && self.hover.clear().is_some() {
                self.state = self.state.on_marker_leave();
                self.emit_hover(None);
            }
        }

        let disc = Disc {
            center,
            radius: globe_size,
        };
        let mut scene = FrameScene {
            disc: Some(disc),
            atmosphere: Some(disc),
            countries: Vec::new(),
            markers: Vec::new(),
            cursor: self.state.cursor(),
        };

        // Countries and markers render only once the topology for the
        // current generation has applied.
        if let Some(topology) = &self.topology {
            let cfg = config(self.metric);
            for shape in &topology.countries {
                let fill = match cfg.country_value {
                    Some(accessor) => self
                        .country_lookup
                        .get(shape.name.as_str())
                        .map(|&index| accessor(&self.countries[index]))
                        .filter(|&v| has_value(v))
                        .map(|v| darken(self.scale.color(v), 0.3))
                        .unwrap_or(NEUTRAL_FILL),
                    None => NEUTRAL_FILL,
                };
                scene.countries.push(CountryPath {
                    name: shape.name.clone(),
                    fill,
                    subpaths: project_polygons(&projection, &shape.polygons),
                });
            }

            for (slot, marker) in self.markers.iter().enumerate() {
                let position = if visible[slot] {
                    projection.project(marker.coordinate)
                } else {
                    None
                };
                let emphasized = self.hover.current() == Some(slot);
                scene.markers.push(MarkerSprite {
                    index: slot,
                    position,
                    color: self.scale.color(marker.value),
                    radius: if emphasized {
                        MARKER_EMPHASIZED_RADIUS_PX
                    } else {
                        MARKER_RADIUS_PX
                    },
                    stroke: if emphasized {
                        MARKER_EMPHASIS_STROKE
                    } else {
                        MARKER_STROKE
                    },
                    emphasized,
                });
            }

            // Raise the hovered marker to the back of the draw order.
            if let Some(slot) = self.hover.current() {
                if let Some(pos) = scene.markers.iter().position(|m| m.index == slot) {
                    let sprite = scene.markers.remove(pos);
                    scene.markers.push(sprite);
                }
            }
        }

        self.scene = scene;
    }

    fn apply_hover_transitions(&mut self, transitions: Vec<HoverTransition>) {
        for transition in transitions {
            match transition {
                HoverTransition::Leave(_) => {
                    self.state = self.state.on_marker_leave();
                    self.emit_hover(None);
                }
                HoverTransition::Enter(slot) => {
                    self.state = self.state.on_marker_enter();
                    self.emit_hover(Some(slot));
                }
            }
        }
    }

    fn emit_hover(&mut self, slot: Option<usize>) {
        let record = slot
            .and_then(|s| self.markers.get(s))
            .and_then(|m| self.cities.get(m.city_index))
            .cloned();
        let event = HoverEvent {
            position: self.last_pointer,
            record,
        };
        if let Some(handler) = self.hover_handler.as_mut() {
            handler(event);
        }
    }
}
