/// The `egui` re-export for building native GUIs with the eframe framework.
use eframe::egui::{self, Color32, Stroke};
/// Additional 2D geometric tools from eframe, e.g. `Vec2`.
use eframe::epaint::Vec2;
/// The `egui_plot` crate for plotting data in an egui-based app.
use egui_plot::{Line, Plot, PlotPoints};

use std::collections::VecDeque;
use std::f64::consts::PI;

use sp2sim::core::orientation::{AXIS_SPACING, alignment_weight};
use sp2sim::{Preset, SimParams, Simulation};

// ===================================================================================
// Display Constants
// ===================================================================================

/// How many samples the kinetic-energy chart retains.
const KE_HISTORY: usize = 200;
/// Chart sampling stride in frames.
const CHART_EVERY: u64 = 3;
/// Deep-space backdrop behind the particles.
const BACKGROUND: Color32 = Color32::from_rgb(0x0a, 0x0e, 0x17);

// ===================================================================================
// Main Application
// ===================================================================================

/// The primary application state:
/// - The live simulation parameters, editable at any time through sliders
/// - The simulation itself (particle store, RNG, frame counter)
/// - The "running" flag and the preset currently highlighted, if any
/// - A bounded history of kinetic-energy samples for the bottom chart
struct SimApp {
    params: SimParams,
    sim: Simulation,
    running: bool,
    active_preset: Option<Preset>,
    energy_history: VecDeque<[f64; 2]>,
}

impl SimApp {
    /// Creates the app on the default preset with a fresh random seed.
    fn new() -> sp2sim::Result<Self> {
        let params = SimParams::default();
        let sim = Simulation::new(&params, None)?;
        Ok(Self {
            params,
            sim,
            running: false,
            active_preset: Some(Preset::Graphene),
            energy_history: VecDeque::new(),
        })
    }

    /// Loads a preset's parameters and restarts from fresh initial conditions.
    fn apply_preset(&mut self, preset: Preset) {
        self.params = preset.params();
        self.active_preset = Some(preset);
        self.restart();
        log::info!("preset applied: {}", preset.label());
    }

    /// Respawns the population under the current parameters and clears the
    /// energy chart. The sliders only produce values the validator accepts,
    /// but a rejection is still logged rather than ignored.
    fn restart(&mut self) {
        if let Err(e) = self.sim.reset(&self.params) {
            log::error!("reset rejected: {e}");
            return;
        }
        self.energy_history.clear();
        log::info!(
            "reset: {} particles, eq_dist {}, {}x{} domain",
            self.params.n,
            self.params.eq_dist,
            self.params.w,
            self.params.h
        );
    }

    /// Records a kinetic-energy sample every few frames, dropping the
    /// oldest once the chart is full.
    fn record_energy(&mut self, energy: f64) {
        if self.sim.frame() % CHART_EVERY != 0 {
            return;
        }
        self.energy_history.push_back([self.sim.frame() as f64, energy]);
        if self.energy_history.len() > KE_HISTORY {
            self.energy_history.pop_front();
        }
    }

    /// Paints the whole scene: gated bonds first, then per-particle bonding
    /// spokes, glow and core, scaled to fit the panel.
    fn draw_particles(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        let rect = ui.max_rect();
        let scale =
            (rect.width() as f64 / self.params.w).min(rect.height() as f64 / self.params.h);
        let to_screen = |x: f64, y: f64| rect.min + Vec2::new((x * scale) as f32, (y * scale) as f32);

        painter.rect_filled(rect, 0.0, BACKGROUND);

        let particles = &self.sim.particles;
        let eq = self.params.eq_dist;
        let bond_cut = 1.4 * eq;

        // A bond is drawn where both particles aim an axis along the pair
        // line; it fades with stretch and brightens with alignment.
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let (a, b) = (&particles[i], &particles[j]);
                let dx = b.x - a.x;
                let dy = b.y - a.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= bond_cut || dist < 1e-9 {
                    continue;
                }
                let angle = dy.atan2(dx);
                let gate = alignment_weight(angle, a.theta, self.params.sharpness)
                    * alignment_weight(angle + PI, b.theta, self.params.sharpness);
                if gate <= 0.15 {
                    continue;
                }
                let fade = 1.0 - (dist - 0.7 * eq) / (bond_cut - 0.7 * eq);
                let alpha = ((gate * 0.9).min(1.0) * fade).clamp(0.0, 1.0);
                let stroke = Stroke::new(
                    ((1.5 + gate) * scale) as f32,
                    Color32::from_rgba_unmultiplied(80, 200, 255, (alpha * 255.0) as u8),
                );
                painter.line_segment([to_screen(a.x, a.y), to_screen(b.x, b.y)], stroke);
            }
        }

        let spoke_len = 0.35 * eq;
        let spoke_stroke = Stroke::new(
            scale as f32,
            Color32::from_rgba_unmultiplied(80, 200, 255, 64),
        );
        for p in particles {
            let center = to_screen(p.x, p.y);
            for k in 0..3 {
                let axis = p.theta + k as f64 * AXIS_SPACING;
                let tip = to_screen(p.x + spoke_len * axis.cos(), p.y + spoke_len * axis.sin());
                painter.line_segment([center, tip], spoke_stroke);
            }
            painter.circle_filled(
                center,
                (5.0 * scale) as f32,
                Color32::from_rgba_unmultiplied(60, 160, 220, 90),
            );
            painter.circle_filled(center, (2.0 * scale) as f32, Color32::from_rgb(0xb0, 0xe8, 0xff));
        }
    }
}

impl eframe::App for SimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --------------------------
        // Sidebar with configuration
        // --------------------------
        egui::SidePanel::left("config_panel").show(ctx, |ui| {
            ui.heading("Simulation Controls");

            ui.label("Presets");
            ui.horizontal_wrapped(|ui| {
                for preset in Preset::ALL {
                    let selected = self.active_preset == Some(preset);
                    if ui.selectable_label(selected, preset.label()).clicked() {
                        self.apply_preset(preset);
                    }
                }
            });

            ui.separator();

            // Sliders stay live while the simulation runs; the physics picks
            // up the new values on the next tick. Any manual edit leaves
            // preset territory.
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut self.params.n, 100..=1000).text("Particles"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.eq_dist, 5.0..=50.0).text("Bond Distance"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.rep_str, 100.0..=3000.0).text("Repulsion"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.att_str, 50.0..=1000.0).text("Attraction"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.params.sharpness, 1.0..=8.0)
                        .text("Angular Sharpness"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.params.torque_str, 10.0..=200.0)
                        .text("Torque Strength"),
                )
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.friction, 0.0..=5.0).text("Friction"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.w, 400.0..=1200.0).text("Width"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.h, 300.0..=800.0).text("Height"))
                .changed();
            if changed {
                self.active_preset = None;
            }

            ui.separator();

            ui.horizontal(|ui| {
                let toggle = if self.running { "Pause" } else { "Play" };
                if ui.button(toggle).clicked() {
                    self.running = !self.running;
                }
                if ui.button("Reset").clicked() {
                    self.restart();
                }
            });
        });

        // ------------------------------------
        // If we're running, advance one tick
        // ------------------------------------
        if self.running {
            match self.sim.tick(&self.params) {
                Ok(energy) => self.record_energy(energy),
                Err(e) => {
                    log::error!("tick failed: {e}");
                    self.running = false;
                }
            }
        }

        // ------------------------------------
        // UI layout for top, bottom, central
        // ------------------------------------
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Carbon sp² Self-Assembly");
            ui.label(format!(
                "Particle count: {}  |  Frame: {}",
                self.sim.particles.len(),
                self.sim.frame()
            ));
        });

        egui::TopBottomPanel::bottom("energy_panel").show(ctx, |ui| {
            ui.label("Kinetic energy");
            let plot = Plot::new("kinetic_energy")
                .height(80.0)
                .include_y(0.0)
                .allow_scroll(false)
                .allow_drag(false);

            plot.show(ui, |plot_ui| {
                if !self.energy_history.is_empty() {
                    let points: Vec<[f64; 2]> = self.energy_history.iter().copied().collect();
                    let line = Line::new(PlotPoints::from(points));
                    plot_ui.line(line);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_particles(ui);
        });

        // Request another frame to keep animating (or remain static if paused).
        ctx.request_repaint();
    }
}

// ===================================================================================
// main
// ===================================================================================

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Carbon sp² Self-Assembly",
        native_options,
        Box::new(|_cc| Ok(Box::new(SimApp::new()?))),
    )
}
