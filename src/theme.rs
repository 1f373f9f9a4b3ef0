use std::collections::HashSet;

use crate::color::{Color, Hsl};
use crate::pipeline::parse::NamedColor;
use crate::pipeline::shades::{derive_ramp, Ramp};

/// A named base color together with everything the backends render for it.
#[derive(Debug, Clone)]
pub struct ThemeColor {
    pub name: String,
    pub slug: String,
    pub color: Color,
    pub hsl: Hsl,
    pub ramp: Ramp,
}

impl ThemeColor {
    pub fn new(named: &NamedColor) -> Self {
        Self::with_slug(named, named.slug())
    }

    fn with_slug(named: &NamedColor, slug: String) -> Self {
        Self {
            name: named.name.clone(),
            slug,
            color: named.color,
            hsl: named.color.to_hsl(),
            ramp: derive_ramp(named.color),
        }
    }
}

/// The full set of colors read from one input file, in input order.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: Vec<ThemeColor>,
}

impl Theme {
    /// Derive ramps for every parsed color.
    ///
    /// Slugs name CSS variables and image files, so they must be unique. A
    /// slug that is taken, or whose `<slug>-shades` image name is taken, gets
    /// a `-2`, `-3`, ... suffix. `palette` is reserved for the combined
    /// palette image.
    pub fn from_colors(colors: &[NamedColor]) -> Self {
        let mut taken: HashSet<String> = HashSet::from([RESERVED_SLUG.to_string()]);
        let colors = colors
            .iter()
            .map(|named| {
                let slug = unique_slug(named.slug(), &mut taken);
                if slug != named.slug() {
                    log::warn!("{:?} collides with an earlier name, using slug {slug:?}", named.name);
                }
                ThemeColor::with_slug(named, slug)
            })
            .collect();
        Self { colors }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

const RESERVED_SLUG: &str = "palette";

/// `taken` holds image file stems: every slug and its `-shades` strip.
fn unique_slug(base: String, taken: &mut HashSet<String>) -> String {
    let mut slug = base.clone();
    let mut n = 2;
    while taken.contains(&slug) || taken.contains(&format!("{slug}-shades")) {
        slug = format!("{base}-{n}");
        n += 1;
    }
    taken.insert(format!("{slug}-shades"));
    taken.insert(slug.clone());
    slug
}
