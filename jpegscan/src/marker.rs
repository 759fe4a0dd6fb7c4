use std::fmt;

jpegscan_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Marker {
        /// Baseline DCT
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        /// Progressive DCT
        SOF2 = 0xC2,
        SOF3 = 0xC3,
        /// Define Huffman table
        DHT = 0xC4,
        SOF5 = 0xC5,
        SOF6 = 0xC6,
        SOF7 = 0xC7,
        SOF8 = 0xC8,
        SOF9 = 0xC9,
        SOF10 = 0xCA,
        SOF11 = 0xCB,
        SOF12 = 0xCC,
        SOF13 = 0xCD,
        SOF14 = 0xCE,
        SOF15 = 0xCF,
        RST0 = 0xD0,
        RST1 = 0xD1,
        RST2 = 0xD2,
        RST3 = 0xD3,
        RST4 = 0xD4,
        RST5 = 0xD5,
        RST6 = 0xD6,
        RST7 = 0xD7,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        /// Define quantization table
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        APP9 = 0xE9,
        APP10 = 0xEA,
        APP11 = 0xEB,
        APP12 = 0xEC,
        APP13 = 0xED,
        /// Adobe
        APP14 = 0xEE,
        APP15 = 0xEF,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    pub fn code(self) -> u8 {
        self.into()
    }

    /// Whether a two byte length follows the marker code
    ///
    /// Only SOI and EOI stand alone.
    pub fn has_length(self) -> bool {
        !matches!(self, Self::SOI | Self::EOI)
    }

    /// Mnemonic like `SOF2`, `RST5` or `APP1`
    ///
    /// The whole SOF, RST and APP ranges are named by their index. Codes
    /// without a name are shown as `UNK0x..`.
    pub fn short_name(self) -> String {
        let code = self.code();
        let name = match self {
            Self::SOI => "SOI",
            Self::EOI => "EOI",
            Self::DHT => "DHT",
            Self::DQT => "DQT",
            Self::SOS => "SOS",
            Self::DRI => "DRI",
            Self::COM => "COM",
            _ => {
                return match code {
                    0xC0..=0xCF => format!("SOF{}", code & 0x0F),
                    0xD0..=0xD7 => format!("RST{}", code & 0x07),
                    0xE0..=0xEF => format!("APP{}", code & 0x0F),
                    _ => format!("UNK{code:#x}"),
                }
            }
        };

        name.to_string()
    }

    /// Human readable description
    ///
    /// Of the frame markers only baseline and progressive get a description,
    /// the others are reported like unknown codes.
    pub fn long_description(self) -> String {
        let code = self.code();
        let description = match self {
            Self::SOI => "Start Of Image.",
            Self::EOI => "End Of Image.",
            Self::SOF0 => "Start Of Frame (Baseline).",
            Self::SOF2 => "Start Of Frame (Progressive).",
            Self::DHT => "Define Huffman Table.",
            Self::DQT => "Define Quantization Table.",
            Self::SOS => "Start Of Scan.",
            Self::DRI => "Define Restart Interval.",
            Self::COM => "COMment.",
            _ => {
                return match code {
                    0xD0..=0xD7 => format!("ReSTart ({}).", code & 0x07),
                    0xE0..=0xEF => format!("APPlication specific ({}).", code & 0x0F),
                    _ => format!("Unknown symbol: {code:#x}"),
                }
            }
        };

        description.to_string()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// Short name for a raw marker code
pub fn short_name(code: u8) -> String {
    Marker::from(code).short_name()
}

/// Long description for a raw marker code
pub fn long_description(code: u8) -> String {
    Marker::from(code).long_description()
}
