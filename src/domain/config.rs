use serde::{Deserialize, Serialize};

pub const DEFAULT_WORDS: [&str; 12] = [
    "TRAJECTORY", "PROPULSION", "Δv", "CFD", "REENTRY", "ORBITAL",
    "STARSHIP", "MARS", "SPICE", "ROVER", "SCRAMJET", "UAV",
];

/// Time to ease from flat rows to the full spiral once the boot delay elapses.
pub const MORPH_DURATION_MS: f64 = 1200.0;

const MIN_CELL_PX: f32 = 1.0;
const MIN_SPIRAL_SPACING: f32 = 0.01;
const MIN_FONT_PX: f32 = 1.0;

/// Engine options. Every field is optional in JSON (camelCase keys).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VortexConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows_visible: u32,
    pub spiral_spacing: f32,
    /// rad/s at full ramp
    pub base_speed: f32,
    pub boot_delay_ms: f64,
    pub center_x: f32,
    pub center_y: f32,
    pub intro_speed_fraction: f32,
    pub final_speed_fraction: f32,
    pub words: Vec<String>,
    pub separator: String,
    pub filler_glyph: char,
    pub glyph_cycle_rate: f64,
    pub capacity: u32,
    pub radius_margin: f32,
    /// `None` spaces angles evenly; `Some(seed)` uses a seeded offset.
    pub seed: Option<u32>,
    pub font_size: f32,
    pub font_family: String,
    pub fill_style: String,
    pub max_dt_seconds: f32,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            cell_width: 12.0,
            cell_height: 36.0,
            rows_visible: 40,
            spiral_spacing: 4.2,
            base_speed: 48.0,
            boot_delay_ms: 3000.0,
            center_x: 0.5,
            center_y: 0.58,
            intro_speed_fraction: 0.002,
            final_speed_fraction: 0.50,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            separator: "•".to_string(),
            filler_glyph: '•',
            glyph_cycle_rate: 0.06,
            capacity: 12_000,
            radius_margin: 60.0,
            seed: None,
            font_size: 11.0,
            font_family: "\"Courier New\", monospace".to_string(),
            fill_style: "#94a3b8".to_string(),
            max_dt_seconds: 0.1,
        }
    }
}

impl VortexConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: VortexConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Clamp every degenerate value to a safe floor instead of failing.
    pub fn sanitized(mut self) -> Self {
        let d = VortexConfig::default();

        self.cell_width = floor_clamp("cellWidth", self.cell_width, MIN_CELL_PX, d.cell_width);
        self.cell_height = floor_clamp("cellHeight", self.cell_height, MIN_CELL_PX, d.cell_height);
        self.spiral_spacing =
            floor_clamp("spiralSpacing", self.spiral_spacing, MIN_SPIRAL_SPACING, d.spiral_spacing);
        self.base_speed = floor_clamp("baseSpeed", self.base_speed, 0.0, d.base_speed);
        self.font_size = floor_clamp("fontSize", self.font_size, MIN_FONT_PX, d.font_size);
        self.radius_margin = floor_clamp("radiusMargin", self.radius_margin, 0.0, d.radius_margin);
        self.max_dt_seconds =
            floor_clamp("maxDtSeconds", self.max_dt_seconds, 0.0, d.max_dt_seconds);

        self.center_x = unit_clamp("centerX", self.center_x, d.center_x);
        self.center_y = unit_clamp("centerY", self.center_y, d.center_y);
        self.intro_speed_fraction =
            unit_clamp("introSpeedFraction", self.intro_speed_fraction, d.intro_speed_fraction);
        self.final_speed_fraction =
            unit_clamp("finalSpeedFraction", self.final_speed_fraction, d.final_speed_fraction);

        if self.rows_visible == 0 {
            console_warn!("vortex config: rowsVisible=0 clamped to 1");
            self.rows_visible = 1;
        }
        if self.capacity == 0 {
            console_warn!("vortex config: capacity=0 clamped to 1");
            self.capacity = 1;
        }
        if !self.boot_delay_ms.is_finite() || self.boot_delay_ms < 0.0 {
            console_warn!("vortex config: bootDelayMs={} clamped to 0", self.boot_delay_ms);
            self.boot_delay_ms = 0.0;
        }
        if !self.glyph_cycle_rate.is_finite() || self.glyph_cycle_rate < 0.0 {
            console_warn!("vortex config: glyphCycleRate={} reset", self.glyph_cycle_rate);
            self.glyph_cycle_rate = d.glyph_cycle_rate;
        }
        if self.filler_glyph.is_whitespace() {
            self.filler_glyph = d.filler_glyph;
        }
        self
    }

    /// Angular speed (rad/s) at a given eased morph factor.
    pub fn speed_at(&self, morph: f32) -> f32 {
        let intro = self.intro_speed_fraction;
        let fin = self.final_speed_fraction;
        self.base_speed * (intro + (fin - intro) * morph)
    }

    /// CSS font shorthand for canvas hosts, e.g. `11px "Courier New", monospace`.
    pub fn font_css(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

fn floor_clamp(name: &str, v: f32, min: f32, fallback: f32) -> f32 {
    if !v.is_finite() {
        console_warn!("vortex config: {}={} is not finite, using {}", name, v, fallback);
        return fallback;
    }
    if v < min {
        console_warn!("vortex config: {}={} clamped to {}", name, v, min);
        return min;
    }
    v
}

fn unit_clamp(name: &str, v: f32, fallback: f32) -> f32 {
    if !v.is_finite() {
        console_warn!("vortex config: {}={} is not finite, using {}", name, v, fallback);
        return fallback;
    }
    let c = v.clamp(0.0, 1.0);
    if c != v {
        console_warn!("vortex config: {}={} clamped to {}", name, v, c);
    }
    c
}
