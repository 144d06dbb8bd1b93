use crate::{
    bounce::resolve_bounce,
    debug_draw::{DebugDraw, NoDebugDraw},
    lights::{place_light, LightHandle, LightProperties, LightSink, Orientation},
    math::{Point3, Spectrum},
    sampling::{create_rng, seeded_rng, SampleGrid},
    settings::SpawnerSettings,
    visibility::VisibilityQuery,
    vplgi_debug, vplgi_trace, vplgi_warn,
};

use rand_pcg::Pcg32;

/// The light that VPLs bounce from. Read fresh every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSource {
    pub position: Point3<f32>,
    pub orientation: Orientation,
}

impl LightSource {
    pub fn new(position: Point3<f32>, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Summary of one [`VplSpawner::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Rays cast
    pub samples: usize,
    /// VPLs placed, one per ray that hit something
    pub placed: usize,
}

/// Places a primary light at the source and rebuilds a set of virtual point
/// lights around it every frame.
///
/// All placed VPLs are destroyed and new ones spawned on each tick. Nothing is
/// carried over between frames so jittered samples land somewhere new every time.
pub struct VplSpawner {
    settings: SpawnerSettings,
    // Per-VPL strength once started, the configured direct strength before that
    light_strength: f32,
    jitter_radians: f32,
    vpls: Vec<LightHandle>,
    primary: Option<LightHandle>,
    started: bool,
    rng: Pcg32,
}

impl VplSpawner {
    /// Creates a new `VplSpawner` with a randomly seeded sampler.
    pub fn new(settings: SpawnerSettings) -> Self {
        Self::with_rng(settings, create_rng())
    }

    /// Creates a new `VplSpawner` whose jitter is reproducible for the given `seed`.
    pub fn with_seed(settings: SpawnerSettings, seed: u64) -> Self {
        Self::with_rng(settings, seeded_rng(seed))
    }

    fn with_rng(settings: SpawnerSettings, rng: Pcg32) -> Self {
        let settings = settings.sanitized();
        Self {
            settings,
            light_strength: settings.light_strength,
            jitter_radians: settings.jitter_degrees.to_radians(),
            vpls: Vec::new(),
            primary: None,
            started: false,
            rng,
        }
    }

    pub fn settings(&self) -> &SpawnerSettings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next tick.
    ///
    /// The primary light keeps the properties it was spawned with.
    pub fn set_settings(&mut self, settings: SpawnerSettings) {
        self.settings = settings.sanitized();
        self.light_strength = if self.started {
            self.settings.light_strength / (self.settings.sample_count() as f32)
        } else {
            self.settings.light_strength
        };
    }

    /// Strength of a VPL with a lambert term of 1.
    pub fn light_strength(&self) -> f32 {
        self.light_strength
    }

    /// Jitter used by the latest tick.
    pub fn jitter_radians(&self) -> f32 {
        self.jitter_radians
    }

    /// Handles of the VPLs placed by the latest tick.
    pub fn vpls(&self) -> &[LightHandle] {
        &self.vpls
    }

    pub fn primary_light(&self) -> Option<LightHandle> {
        self.primary
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Spawns the direct light and scales the VPL strength by the sample count
    /// so the total bounced energy stays independent of the grid resolution.
    ///
    /// Should be called once before the first tick.
    pub fn begin_play<S>(&mut self, source: &LightSource, sink: &mut S)
    where
        S: LightSink + ?Sized,
    {
        if self.started {
            vplgi_warn!("begin_play called on a spawner that is already running");
            return;
        }

        let props = LightProperties::from_settings(&self.settings);
        let white = Spectrum::ones().normalized();
        self.primary = Some(place_light(
            sink,
            &props,
            source.position,
            source.orientation,
            white,
            self.settings.light_strength,
        ));

        let sample_count = self.settings.sample_count();
        self.light_strength = self.settings.light_strength / (sample_count as f32);
        self.started = true;

        vplgi_debug!(
            "Primary light spawned at {:?}, {} VPL samples at strength {}",
            source.position,
            sample_count,
            self.light_strength
        );
    }

    /// Replaces the VPLs of the previous frame with new ones.
    ///
    /// `debug` only gets drawn to when debug drawing is enabled in the settings.
    pub fn tick<V, S>(
        &mut self,
        source: &LightSource,
        scene: &V,
        sink: &mut S,
        debug: &mut dyn DebugDraw,
    ) -> FrameStats
    where
        V: VisibilityQuery + ?Sized,
        S: LightSink + ?Sized,
    {
        // Settings can change between frames
        self.jitter_radians = self.settings.jitter_degrees.to_radians();

        self.clear_vpls(sink);

        let grid = SampleGrid::new(
            self.settings.altitude_samples,
            self.settings.azimuth_samples,
            self.jitter_radians,
        );
        let props = LightProperties::from_settings(&self.settings);

        let mut no_debug = NoDebugDraw;
        let debug: &mut dyn DebugDraw = if self.settings.debug_draw {
            debug
        } else {
            &mut no_debug
        };

        let mut stats = FrameStats::default();
        for (altitude_index, azimuth_index) in grid.cells() {
            stats.samples += 1;

            let direction = grid.direction(altitude_index, azimuth_index, &mut self.rng);
            if let Some(sample) = resolve_bounce(
                scene,
                source.position,
                direction,
                self.settings.max_distance,
                &mut *debug,
            ) {
                let light = place_light(
                    sink,
                    &props,
                    sample.position,
                    source.orientation,
                    sample.color,
                    self.light_strength * sample.lambert,
                );
                self.vpls.push(light);
            }
        }
        stats.placed = self.vpls.len();

        vplgi_trace!("Placed {}/{} VPLs", stats.placed, stats.samples);

        stats
    }

    /// Destroys every light this spawner has placed, including the primary light.
    ///
    /// The spawner can be started again with [`VplSpawner::begin_play`].
    pub fn end_play<S>(&mut self, sink: &mut S)
    where
        S: LightSink + ?Sized,
    {
        self.clear_vpls(sink);
        if let Some(primary) = self.primary.take() {
            sink.destroy(primary);
        }
        self.started = false;
        self.light_strength = self.settings.light_strength;
    }

    fn clear_vpls<S>(&mut self, sink: &mut S)
    where
        S: LightSink + ?Sized,
    {
        for light in self.vpls.drain(..) {
            sink.destroy(light);
        }
    }
}
