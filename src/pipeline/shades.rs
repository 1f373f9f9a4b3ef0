use crate::color::{Color, Hsl};

/// A position in a ramp, from the near-white 50 to the near-black 900.
/// `S500` is the base color itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Step {
    /// All steps, lightest first.
    pub const ALL: [Step; 10] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
    ];

    pub fn label(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
            Step::S900 => 900,
        }
    }

    pub fn from_label(label: u16) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Near-white lightness (percent) that the lighter steps approach.
pub const CEILING: f32 = 97.0;
/// Near-black lightness (percent) that the darker steps approach.
pub const FLOOR: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
enum Target {
    Ceiling,
    Base,
    Floor,
}

#[derive(Debug, Clone, Copy)]
struct StepRule {
    target: Target,
    /// Share of the distance from the base lightness to the target.
    fraction: f32,
    /// Multiplier applied to the base saturation.
    saturation: f32,
}

const fn rule(target: Target, fraction: f32, saturation: f32) -> StepRule {
    StepRule {
        target,
        fraction,
        saturation,
    }
}

/// Indexed in `Step::ALL` order.
const STEP_TABLE: [StepRule; 10] = [
    rule(Target::Ceiling, 0.95, 0.85),
    rule(Target::Ceiling, 0.85, 1.0),
    rule(Target::Ceiling, 0.65, 1.0),
    rule(Target::Ceiling, 0.45, 1.0),
    rule(Target::Ceiling, 0.25, 1.0),
    rule(Target::Base, 0.0, 1.0),
    rule(Target::Floor, 0.25, 1.0),
    rule(Target::Floor, 0.50, 1.0),
    rule(Target::Floor, 0.70, 1.0),
    rule(Target::Floor, 0.90, 0.90),
];

const BASE_INDEX: usize = 5;

/// One entry of a ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub step: Step,
    pub color: Color,
    pub hsl: Hsl,
}

/// The ten shades derived from a single base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    shades: [Color; 10],
}

impl Ramp {
    pub fn base(&self) -> Color {
        self.shades[BASE_INDEX]
    }

    pub fn get(&self, step: Step) -> Color {
        self.shades[step.index()]
    }

    /// Always 10.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shades in step order, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = Shade> + '_ {
        Step::ALL.into_iter().map(move |step| {
            let color = self.get(step);
            Shade {
                step,
                color,
                hsl: color.to_hsl(),
            }
        })
    }
}

/// Derive the 10-step ramp for `base`.
///
/// Lightness moves from the base toward [`CEILING`] or [`FLOOR`] by the
/// fixed per-step fraction, hue is kept and saturation is scaled by the
/// per-step factor. A base already at or beyond a bound heads for pure
/// white or black instead. Step 500 is `base` untouched.
pub fn derive_ramp(base: Color) -> Ramp {
    let hsl = base.to_hsl();
    let mut shades = [base; 10];

    for (shade, rule) in shades.iter_mut().zip(STEP_TABLE.iter()) {
        *shade = match rule.target {
            Target::Base => base,
            Target::Ceiling => shade_toward(hsl, lighter_target(hsl.lightness), rule),
            Target::Floor => shade_toward(hsl, darker_target(hsl.lightness), rule),
        };
    }

    enforce_ordering(&mut shades);

    log::trace!(
        "ramp for {base}: {}",
        shades
            .iter()
            .map(Color::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ramp { shades }
}

fn lighter_target(lightness: f32) -> f32 {
    if lightness >= CEILING {
        100.0
    } else {
        CEILING
    }
}

fn darker_target(lightness: f32) -> f32 {
    if lightness <= FLOOR {
        0.0
    } else {
        FLOOR
    }
}

fn shade_toward(base: Hsl, target: f32, rule: &StepRule) -> Color {
    let lightness = base.lightness + (target - base.lightness) * rule.fraction;
    Color::from_hsl(Hsl::new(
        base.hue,
        base.saturation * rule.saturation,
        lightness,
    ))
}

/// Rounding to u8 channels can nudge a shade past its inner neighbour when
/// the base sits close to a bound. Walk outward from 500 and replace any
/// such shade with the neighbour, so lightness never increases from 50 to 900.
fn enforce_ordering(shades: &mut [Color; 10]) {
    for i in (0..BASE_INDEX).rev() {
        if shades[i].lightness_key() < shades[i + 1].lightness_key() {
            shades[i] = shades[i + 1];
        }
    }
    for i in BASE_INDEX + 1..shades.len() {
        if shades[i].lightness_key() > shades[i - 1].lightness_key() {
            shades[i] = shades[i - 1];
        }
    }
}
