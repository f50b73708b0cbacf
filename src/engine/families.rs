//! Static language metadata: display names and linguistic families.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::Rgb;

/// Family name reported for codes that no registered family lists.
pub const OTHER_FAMILY: &str = "Other";

/// Colour used for [`OTHER_FAMILY`] and unknown family names.
pub const OTHER_COLOR: Rgb = Rgb::gray(0x99);

/// A registered language family.
#[derive(Clone, Debug)]
pub struct Family {
	/// Stable lowercase identifier.
	pub key: &'static str,
	/// Display name, also used as the lookup key.
	pub name: &'static str,
	/// Legend and node colour.
	pub color: Rgb,
	/// Member codes in display order.
	pub languages: &'static [&'static str],
}

const FAMILIES: &[Family] = &[
	Family {
		key: "germanic",
		name: "Germanic",
		color: Rgb::new(0x4e, 0x79, 0xa7),
		languages: &["en", "de", "nl", "sv", "da", "no", "nb", "nn", "is", "af", "fy", "lb", "yi", "fo"],
	},
	Family {
		key: "romance",
		name: "Romance",
		color: Rgb::new(0xf2, 0x8e, 0x2b),
		languages: &["es", "pt", "fr", "it", "ro", "ca", "gl", "oc", "la"],
	},
	Family {
		key: "slavic",
		name: "Slavic",
		color: Rgb::new(0xe1, 0x57, 0x59),
		languages: &["ru", "uk", "be", "pl", "cs", "sk", "sl", "hr", "sr", "bs", "bg", "mk"],
	},
	Family {
		key: "baltic",
		name: "Baltic",
		color: Rgb::new(0x76, 0xb7, 0xb2),
		languages: &["lt", "lv"],
	},
	Family {
		key: "uralic",
		name: "Uralic",
		color: Rgb::new(0x59, 0xa1, 0x4f),
		languages: &["fi", "et", "hu"],
	},
	Family {
		key: "celtic",
		name: "Celtic",
		color: Rgb::new(0x2c, 0xa0, 0x2c),
		languages: &["ga", "cy", "gd", "br"],
	},
	Family {
		key: "hellenic",
		name: "Hellenic",
		color: Rgb::new(0x17, 0xbe, 0xcf),
		languages: &["el"],
	},
	Family {
		key: "indo_iranian",
		name: "Indo-Iranian",
		color: Rgb::new(0xed, 0xc9, 0x48),
		languages: &["hi", "ur", "bn", "pa", "gu", "mr", "ne", "si", "fa", "ps", "ku", "tg"],
	},
	Family {
		key: "semitic",
		name: "Semitic",
		color: Rgb::new(0xb0, 0x7a, 0xa1),
		languages: &["ar", "he", "mt", "am"],
	},
	Family {
		key: "turkic",
		name: "Turkic",
		color: Rgb::new(0xff, 0x9d, 0xa7),
		languages: &["tr", "az", "kk", "uz", "ky", "tk", "tt"],
	},
	Family {
		key: "sino_tibetan",
		name: "Sino-Tibetan",
		color: Rgb::new(0x9c, 0x75, 0x5f),
		languages: &["zh", "my"],
	},
	Family {
		key: "japonic_koreanic",
		name: "Japonic & Koreanic",
		color: Rgb::new(0x8c, 0x56, 0x4b),
		languages: &["ja", "ko"],
	},
	Family {
		key: "austronesian",
		name: "Austronesian",
		color: Rgb::new(0x94, 0x67, 0xbd),
		languages: &["id", "ms", "tl", "jv", "mg"],
	},
	Family {
		key: "dravidian",
		name: "Dravidian",
		color: Rgb::new(0xbc, 0xbd, 0x22),
		languages: &["ta", "te", "kn", "ml"],
	},
	Family {
		key: "southeast_asian",
		name: "Tai-Kadai & Austroasiatic",
		color: Rgb::new(0x1f, 0x77, 0xb4),
		languages: &["th", "lo", "vi", "km"],
	},
	Family {
		key: "niger_congo",
		name: "Niger-Congo",
		color: Rgb::new(0xd6, 0x27, 0x28),
		languages: &["sw", "zu", "xh", "yo", "ig"],
	},
];

const NAMES: &[(&str, &str)] = &[
	("af", "Afrikaans"),
	("am", "Amharic"),
	("ar", "Arabic"),
	("az", "Azerbaijani"),
	("be", "Belarusian"),
	("bg", "Bulgarian"),
	("bn", "Bengali"),
	("br", "Breton"),
	("bs", "Bosnian"),
	("ca", "Catalan"),
	("cs", "Czech"),
	("cy", "Welsh"),
	("da", "Danish"),
	("de", "German"),
	("el", "Greek"),
	("en", "English"),
	("eo", "Esperanto"),
	("es", "Spanish"),
	("et", "Estonian"),
	("eu", "Basque"),
	("fa", "Persian"),
	("fi", "Finnish"),
	("fo", "Faroese"),
	("fr", "French"),
	("fy", "Frisian"),
	("ga", "Irish"),
	("gd", "Scottish Gaelic"),
	("gl", "Galician"),
	("gu", "Gujarati"),
	("he", "Hebrew"),
	("hi", "Hindi"),
	("hr", "Croatian"),
	("hu", "Hungarian"),
	("hy", "Armenian"),
	("id", "Indonesian"),
	("ig", "Igbo"),
	("is", "Icelandic"),
	("it", "Italian"),
	("ja", "Japanese"),
	("jv", "Javanese"),
	("ka", "Georgian"),
	("kk", "Kazakh"),
	("km", "Khmer"),
	("kn", "Kannada"),
	("ko", "Korean"),
	("ku", "Kurdish"),
	("ky", "Kyrgyz"),
	("la", "Latin"),
	("lb", "Luxembourgish"),
	("lo", "Lao"),
	("lt", "Lithuanian"),
	("lv", "Latvian"),
	("mg", "Malagasy"),
	("mk", "Macedonian"),
	("ml", "Malayalam"),
	("mn", "Mongolian"),
	("mr", "Marathi"),
	("ms", "Malay"),
	("mt", "Maltese"),
	("my", "Burmese"),
	("nb", "Norwegian Bokmål"),
	("ne", "Nepali"),
	("nl", "Dutch"),
	("nn", "Norwegian Nynorsk"),
	("no", "Norwegian"),
	("oc", "Occitan"),
	("pa", "Punjabi"),
	("pl", "Polish"),
	("ps", "Pashto"),
	("pt", "Portuguese"),
	("ro", "Romanian"),
	("ru", "Russian"),
	("si", "Sinhala"),
	("sk", "Slovak"),
	("sl", "Slovenian"),
	("sq", "Albanian"),
	("sr", "Serbian"),
	("sv", "Swedish"),
	("sw", "Swahili"),
	("ta", "Tamil"),
	("te", "Telugu"),
	("tg", "Tajik"),
	("th", "Thai"),
	("tk", "Turkmen"),
	("tl", "Filipino"),
	("tr", "Turkish"),
	("tt", "Tatar"),
	("uk", "Ukrainian"),
	("ur", "Urdu"),
	("uz", "Uzbek"),
	("vi", "Vietnamese"),
	("xh", "Xhosa"),
	("yi", "Yiddish"),
	("yo", "Yoruba"),
	("zh", "Chinese"),
	("zu", "Zulu"),
];

static METADATA: LazyLock<LanguageMetadata> =
	LazyLock::new(|| LanguageMetadata::new(NAMES, FAMILIES));

/// The process-wide metadata table.
pub fn metadata() -> &'static LanguageMetadata {
	&METADATA
}

/// Display names plus family membership, with an inverse code → family index.
pub struct LanguageMetadata {
	names: HashMap<&'static str, &'static str>,
	families: &'static [Family],
	family_index: HashMap<&'static str, usize>,
}

impl LanguageMetadata {
	/// Index `names` and `families`. Blank display names are dropped.
	pub fn new(names: &'static [(&'static str, &'static str)], families: &'static [Family]) -> Self {
		let names = names
			.iter()
			.filter(|(_, name)| !name.trim().is_empty())
			.copied()
			.collect();
		let mut family_index = HashMap::new();
		for (i, family) in families.iter().enumerate() {
			for &code in family.languages {
				// first registration wins
				family_index.entry(code).or_insert(i);
			}
		}
		Self {
			names,
			families,
			family_index,
		}
	}

	/// Non-empty display name, if registered.
	pub fn display_name(&self, code: &str) -> Option<&'static str> {
		self.names.get(code).copied()
	}

	/// Display name, falling back to the code itself.
	pub fn label<'a>(&self, code: &'a str) -> &'a str {
		self.display_name(code).unwrap_or(code)
	}

	/// Whether `code` has a non-empty display name.
	pub fn is_named(&self, code: &str) -> bool {
		self.names.contains_key(code)
	}

	/// Registered families in registration order.
	pub fn families(&self) -> &'static [Family] {
		self.families
	}

	/// Family name for `code`, [`OTHER_FAMILY`] when unlisted.
	pub fn family_of(&self, code: &str) -> &'static str {
		self.family_index
			.get(code)
			.map(|&i| self.families[i].name)
			.unwrap_or(OTHER_FAMILY)
	}

	/// Look a family up by display name.
	pub fn family(&self, name: &str) -> Option<&'static Family> {
		self.families.iter().find(|f| f.name == name)
	}

	/// Registered colour, [`OTHER_COLOR`] otherwise.
	pub fn family_color(&self, name: &str) -> Rgb {
		self.family(name).map(|f| f.color).unwrap_or(OTHER_COLOR)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_family_lookup() {
		let meta = metadata();
		assert_eq!(meta.family_of("es"), "Romance");
		assert_eq!(meta.family_of("cs"), "Slavic");
		assert_eq!(meta.family_of("eu"), OTHER_FAMILY);
		assert_eq!(meta.family_of("not-a-code"), OTHER_FAMILY);
	}

	#[test]
	fn test_family_colors() {
		let meta = metadata();
		assert_eq!(meta.family_color("Romance"), Rgb::new(0xf2, 0x8e, 0x2b));
		assert_eq!(meta.family_color(OTHER_FAMILY), OTHER_COLOR);
		assert_eq!(meta.family_color("Klingon"), OTHER_COLOR);
	}

	#[test]
	fn test_first_registration_wins() {
		static DUPES: &[Family] = &[
			Family {
				key: "a",
				name: "A",
				color: Rgb::gray(1),
				languages: &["xx"],
			},
			Family {
				key: "b",
				name: "B",
				color: Rgb::gray(2),
				languages: &["xx", "yy"],
			},
		];
		let meta = LanguageMetadata::new(&[("xx", "X"), ("yy", "Y"), ("zz", "  ")], DUPES);
		assert_eq!(meta.family_of("xx"), "A");
		assert_eq!(meta.family_of("yy"), "B");
		assert!(!meta.is_named("zz"));
		assert_eq!(meta.label("zz"), "zz");
	}

	#[test]
	fn test_every_family_member_is_named() {
		let meta = metadata();
		for family in meta.families() {
			for code in family.languages {
				assert!(meta.is_named(code), "{code} in {} has no name", family.name);
			}
		}
	}
}
