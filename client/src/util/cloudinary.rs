//! Cloudinary delivery URL builder.
//!
//! URLs take the shape
//! `https://res.cloudinary.com/{cloud}/image/upload/{flags}/{public_id}`
//! where `flags` always leads with `f_` and `q_` (both `auto` unless set),
//! followed by whichever of width, height, crop, gravity, dpr and a raw
//! custom transformation are present, in that order.

#[cfg(test)]
#[path = "cloudinary_test.rs"]
mod cloudinary_test;

use std::fmt::Write as _;

/// Breakpoints emitted by [`responsive_srcset`].
pub const SRCSET_WIDTHS: [u32; 6] = [320, 640, 768, 1024, 1280, 1920];

const CDN_HOST: &str = "res.cloudinary.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Auto,
    Webp,
    Avif,
    Jpg,
    Png,
}

impl Format {
    fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crop {
    Fill,
    Fit,
    Scale,
    Thumb,
    Crop,
    Pad,
}

impl Crop {
    fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Fit => "fit",
            Self::Scale => "scale",
            Self::Thumb => "thumb",
            Self::Crop => "crop",
            Self::Pad => "pad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gravity {
    Auto,
    Face,
    Center,
    North,
    South,
    East,
    West,
}

impl Gravity {
    fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Face => "face",
            Self::Center => "center",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dpr {
    Auto,
    Ratio(f32),
}

/// Transformation options. `None` leaves a flag out; `quality: None` means `q_auto`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<Crop>,
    pub gravity: Option<Gravity>,
    pub quality: Option<u8>,
    pub format: Format,
    pub dpr: Option<Dpr>,
    pub custom: Option<String>,
}

impl ImageOptions {
    /// Comma-joined transformation flags.
    pub fn transformations(&self) -> String {
        let mut out = format!("f_{}", self.format.as_str());
        match self.quality {
            Some(q) => {
                let _ = write!(out, ",q_{q}");
            }
            None => out.push_str(",q_auto"),
        }
        if let Some(w) = self.width {
            let _ = write!(out, ",w_{w}");
        }
        if let Some(h) = self.height {
            let _ = write!(out, ",h_{h}");
        }
        if let Some(c) = self.crop {
            let _ = write!(out, ",c_{}", c.as_str());
        }
        if let Some(g) = self.gravity {
            let _ = write!(out, ",g_{}", g.as_str());
        }
        match self.dpr {
            Some(Dpr::Auto) => out.push_str(",dpr_auto"),
            Some(Dpr::Ratio(r)) => {
                let _ = write!(out, ",dpr_{r}");
            }
            None => {}
        }
        if let Some(custom) = self.custom.as_deref().filter(|c| !c.is_empty()) {
            out.push(',');
            out.push_str(custom);
        }
        out
    }
}

/// `https://res.cloudinary.com/{cloud}/image/upload`
pub fn base_url(cloud_name: &str) -> String {
    format!("https://{CDN_HOST}/{cloud_name}/image/upload")
}

/// Delivery URL for `public_id` with `opts` applied.
pub fn image_url(cloud_name: &str, public_id: &str, opts: &ImageOptions) -> String {
    format!(
        "{}/{}/{}",
        base_url(cloud_name),
        opts.transformations(),
        public_id.trim_start_matches('/')
    )
}

/// `srcset` value covering [`SRCSET_WIDTHS`]; any width in `opts` is replaced.
pub fn responsive_srcset(cloud_name: &str, public_id: &str, opts: &ImageOptions) -> String {
    SRCSET_WIDTHS
        .iter()
        .map(|&w| {
            let sized = ImageOptions {
                width: Some(w),
                ..opts.clone()
            };
            format!("{} {w}w", image_url(cloud_name, public_id, &sized))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tiny blurred version for lazy-load placeholders.
pub fn blur_placeholder(cloud_name: &str, public_id: &str) -> String {
    let opts = ImageOptions {
        width: Some(30),
        quality: Some(30),
        custom: Some("e_blur:1000".to_owned()),
        ..ImageOptions::default()
    };
    image_url(cloud_name, public_id, &opts)
}

pub fn is_absolute_url(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// Absolute URLs pass through untouched; anything else is a public id.
pub fn optimized_url(cloud_name: &str, src: &str, opts: &ImageOptions) -> String {
    if is_absolute_url(src) {
        src.to_owned()
    } else {
        image_url(cloud_name, src, opts)
    }
}
