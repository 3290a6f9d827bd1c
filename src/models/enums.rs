use serde::{Deserialize, Serialize};

/// Returned when a stored or submitted string is not a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SymptomTag {
    Fever => "fever",
    Cough => "cough",
    Headache => "headache",
    Nausea => "nausea",
    Vomiting => "vomiting",
    Diarrhea => "diarrhea",
    SoreThroat => "sore_throat",
    RunnyNose => "runny_nose",
    Sneezing => "sneezing",
    Congestion => "congestion",
    Fatigue => "fatigue",
    BodyAches => "body_aches",
    PainfulUrination => "painful_urination",
    ItchyEyes => "itchy_eyes",
    SensitivityToLight => "sensitivity_to_light",
    SensitivityToSound => "sensitivity_to_sound",
    StomachCramps => "stomach_cramps",
    FrequentUrination => "frequent_urination",
    LowerAbdominalPain => "lower_abdominal_pain",
});

impl SymptomTag {
    /// Tag name as it reads in free text ("sore_throat" -> "sore throat").
    pub fn phrase(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

str_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Unknown => "unknown",
});

str_enum!(MessageSender {
    Patient => "patient",
    Doctor => "doctor",
    System => "system",
    Ai => "ai",
});
