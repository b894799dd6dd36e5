//! Figure settings shared by the grid renderers.

use plotters::style::FontFamily;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref DEFAULT_OUTPUT_DIRECTORY: PathBuf = {
        // Set EDA_PLOT_DIR to redirect rendered figures; `target/eda` otherwise.
        if let Some(value) = env::var_os("EDA_PLOT_DIR") {
            PathBuf::from(value)
        } else if let Some(path) = cargo_target_directory() {
            path.join("eda")
        } else {
            PathBuf::from("target/eda")
        }
    };
}

fn cargo_target_directory() -> Option<PathBuf> {
    env::var_os("CARGO_TARGET_DIR").map(PathBuf::from)
}

/// Size, fonts and output location of a rendered figure.
///
/// ```
/// use eda_utils::FigureSettings;
///
/// let settings = FigureSettings::default()
///     .size(1200, 400)
///     .caption_size(16)
///     .output_directory("plots");
/// assert_eq!(settings.get_size(), (1200, 400));
/// ```
#[derive(Clone)]
pub struct FigureSettings {
    size: (u32, u32),
    font: FontFamily<'static>,
    caption_size: u32,
    label_size: u32,
    output_directory: PathBuf,
}

impl Default for FigureSettings {
    /// 1500x500 pixels (a 15x5 inch figure at 100 dpi), sans-serif captions at 20px.
    fn default() -> FigureSettings {
        FigureSettings {
            size: (1500, 500),
            font: FontFamily::SansSerif,
            caption_size: 20,
            label_size: 12,
            output_directory: DEFAULT_OUTPUT_DIRECTORY.clone(),
        }
    }
}

impl fmt::Debug for FigureSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigureSettings")
            .field("size", &self.size)
            .field("font", &self.font.as_str())
            .field("caption_size", &self.caption_size)
            .field("label_size", &self.label_size)
            .field("output_directory", &self.output_directory)
            .finish()
    }
}

impl FigureSettings {
    /// Changes the pixel size of the whole figure. Each panel gets an equal share of the width.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> FigureSettings {
        assert!(width > 0 && height > 0);

        self.size = (width, height);
        self
    }

    /// Changes the font family used for captions and axis descriptions.
    #[must_use]
    pub fn font(mut self, font: FontFamily<'static>) -> FigureSettings {
        self.font = font;
        self
    }

    #[must_use]
    pub fn caption_size(mut self, size: u32) -> FigureSettings {
        self.caption_size = size;
        self
    }

    #[must_use]
    pub fn label_size(mut self, size: u32) -> FigureSettings {
        self.label_size = size;
        self
    }

    /// Changes the directory the `*_svg` renderers write into. Defaults to `$EDA_PLOT_DIR`,
    /// falling back to `target/eda`.
    #[must_use]
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> FigureSettings {
        self.output_directory = path.as_ref().to_owned();
        self
    }

    pub fn get_size(&self) -> (u32, u32) {
        self.size
    }

    pub fn get_font(&self) -> FontFamily<'static> {
        self.font
    }

    pub fn get_caption_size(&self) -> u32 {
        self.caption_size
    }

    pub fn get_label_size(&self) -> u32 {
        self.label_size
    }

    pub fn get_output_directory(&self) -> &Path {
        &self.output_directory
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let settings = FigureSettings::default()
            .size(800, 300)
            .font(FontFamily::Serif)
            .label_size(9)
            .output_directory("/tmp/plots");

        assert_eq!(settings.get_size(), (800, 300));
        assert_eq!(settings.get_caption_size(), 20);
        assert_eq!(settings.get_label_size(), 9);
        assert_eq!(settings.get_output_directory(), Path::new("/tmp/plots"));
    }

    #[test]
    #[should_panic]
    fn zero_size() {
        let _ = FigureSettings::default().size(0, 100);
    }
}
