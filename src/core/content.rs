//! Static copy for the landing page sections

/// A product feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Icon name from `ui::icon::icons`
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops for the icon tile
    pub accent: &'static str,
}

/// One step of the "how it works" walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A headline number in the hero section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Stat {
    /// Text shown before the stats block has been revealed
    pub fn placeholder(&self) -> String {
        format!("0{}", self.suffix)
    }
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: "sparkles",
        title: "AI Background Removal",
        description: "Instantly remove backgrounds from any image using advanced AI technology",
        accent: "from-violet-500 to-purple-500",
    },
    Feature {
        icon: "flip-horizontal",
        title: "Horizontal Flip",
        description: "Automatically flip your processed images for perfect mirror effects",
        accent: "from-cyan-500 to-blue-500",
    },
    Feature {
        icon: "cloud",
        title: "Cloud Storage",
        description: "All your images are securely stored and accessible from anywhere",
        accent: "from-emerald-500 to-green-500",
    },
    Feature {
        icon: "download",
        title: "Easy Download",
        description: "Download your processed images instantly in high quality PNG format",
        accent: "from-orange-500 to-amber-500",
    },
];

pub static STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Upload",
        description: "Drag & drop or click to upload your image (PNG, JPEG, WebP)",
        icon: "image-plus",
    },
    Step {
        number: 2,
        title: "Process",
        description: "Our AI removes the background and flips horizontally",
        icon: "sparkles",
    },
    Step {
        number: 3,
        title: "Download",
        description: "Get your processed image instantly with transparent background",
        icon: "download",
    },
];

pub static STATS: [Stat; 3] = [
    Stat {
        value: 50.0,
        suffix: "+",
        label: "Free Images/Month",
    },
    Stat {
        value: 3.0,
        suffix: "s",
        label: "Processing Time",
    },
    Stat {
        value: 100.0,
        suffix: "%",
        label: "Cloud Storage",
    },
];

/// Reveal delay for the n-th feature card (seconds)
pub fn feature_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

/// Reveal delay for the n-th step (seconds)
pub fn step_delay(index: usize) -> f64 {
    index as f64 * 0.15
}
