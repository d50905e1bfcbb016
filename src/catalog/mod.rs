//! The fixed crop reference catalog.
//!
//! Ten crops, each with a free-text soil descriptor, inclusive tolerance
//! ranges for pH, annual rainfall, temperature, and soil salinity, and an
//! average yield at full suitability. Compiled in, never mutated.

/// Inclusive floating-point tolerance range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive integer tolerance range (rainfall in mm/year, temperature in °C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    /// Crop name as it appears in the source data (Arabic).
    pub name: &'static str,
    /// English gloss for display alongside the name.
    pub name_en: &'static str,
    /// Free-text description of acceptable soil texture/drainage (Arabic).
    pub soil: &'static str,
    pub ph: FloatRange,
    /// mm/year
    pub rainfall: IntRange,
    /// °C
    pub temperature: IntRange,
    /// dS/m
    pub salinity: FloatRange,
    /// Reference yield (ton/feddan) at 100% suitability.
    pub average_yield: f64,
}

impl CropProfile {
    /// "قمح (wheat)" — the form used everywhere the crop is shown.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.name_en)
    }
}

/// The full reference catalog, in source order.
pub static CATALOG: [CropProfile; 10] = [
    CropProfile {
        name: "قمح",
        name_en: "wheat",
        soil: "طينية جيدة الصرف",
        ph: FloatRange::new(6.5, 7.8),
        rainfall: IntRange::new(200, 600),
        temperature: IntRange::new(10, 30),
        salinity: FloatRange::new(0.0, 6.0),
        average_yield: 3.5,
    },
    CropProfile {
        name: "شعير",
        name_en: "barley",
        soil: "جيدة الصرف",
        ph: FloatRange::new(6.5, 7.8),
        rainfall: IntRange::new(150, 500),
        temperature: IntRange::new(10, 30),
        salinity: FloatRange::new(0.0, 5.0),
        average_yield: 3.0,
    },
    CropProfile {
        name: "ذرة",
        name_en: "maize",
        soil: "رملية طينية عميقة",
        ph: FloatRange::new(6.0, 7.5),
        rainfall: IntRange::new(300, 700),
        temperature: IntRange::new(15, 35),
        salinity: FloatRange::new(0.0, 3.0),
        average_yield: 5.0,
    },
    CropProfile {
        name: "زيتون",
        name_en: "olive",
        soil: "طينية خفيفة/رملية طينية جيدة الصرف",
        ph: FloatRange::new(7.0, 8.5),
        rainfall: IntRange::new(200, 600),
        temperature: IntRange::new(10, 35),
        salinity: FloatRange::new(0.0, 4.0),
        average_yield: 2.5,
    },
    CropProfile {
        name: "نخيل",
        name_en: "date palm",
        soil: "رملية طينية جيدة الصرف",
        ph: FloatRange::new(6.5, 8.0),
        rainfall: IntRange::new(0, 100),
        temperature: IntRange::new(18, 45),
        salinity: FloatRange::new(0.0, 8.0),
        average_yield: 2.0,
    },
    CropProfile {
        name: "زعتر",
        name_en: "thyme",
        soil: "رملية/كلسية جيدة الصرف",
        ph: FloatRange::new(6.0, 8.5),
        rainfall: IntRange::new(150, 400),
        temperature: IntRange::new(15, 35),
        salinity: FloatRange::new(0.0, 3.0),
        average_yield: 1.1,
    },
    CropProfile {
        name: "ريحان",
        name_en: "basil",
        soil: "طينية رملية غنية جيدة الصرف",
        ph: FloatRange::new(6.0, 7.5),
        rainfall: IntRange::new(300, 900),
        temperature: IntRange::new(15, 35),
        salinity: FloatRange::new(0.0, 3.0),
        average_yield: 1.5,
    },
    CropProfile {
        name: "لافندر",
        name_en: "lavender",
        soil: "رملية/حصوية كلسية جيدة الصرف",
        ph: FloatRange::new(7.0, 8.5),
        rainfall: IntRange::new(200, 500),
        temperature: IntRange::new(10, 35),
        salinity: FloatRange::new(0.0, 3.0),
        average_yield: 1.0,
    },
    CropProfile {
        name: "بصل",
        name_en: "onion",
        soil: "طينية رملية خصبة جيدة الصرف",
        ph: FloatRange::new(6.0, 7.5),
        rainfall: IntRange::new(250, 600),
        temperature: IntRange::new(10, 30),
        salinity: FloatRange::new(0.0, 2.5),
        average_yield: 6.0,
    },
    CropProfile {
        name: "ثوم",
        name_en: "garlic",
        soil: "طينية رملية خصبة جيدة الصرف",
        ph: FloatRange::new(6.0, 7.5),
        rainfall: IntRange::new(250, 600),
        temperature: IntRange::new(10, 30),
        salinity: FloatRange::new(0.0, 2.5),
        average_yield: 5.0,
    },
];
