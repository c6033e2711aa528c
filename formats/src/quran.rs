//! Payloads of the `api.alquran.cloud` endpoints.
//!
//! The chapter catalogue comes from `GET /v1/surah`, verse content from
//! `GET /v1/surah/{n}/editions/{list}` where one call carries several
//! editions (text, translation, audio) of the same chapter.  All of it is
//! opaque display data for us.
//!

use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;

/// One chapter of the Quran, from the catalogue endpoint.
///
#[derive(Clone, Debug, Deserialize)]
pub struct Chapter {
    pub number: u32,
    /// Arabic name
    pub name: String,
    #[serde(rename = "englishName")]
    pub english_name: String,
    #[serde(rename = "englishNameTranslation")]
    pub english_meaning: String,
    #[serde(rename = "numberOfAyahs")]
    pub verses: u32,
    #[serde(rename = "revelationType")]
    pub revelation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChapterList {
    pub code: u16,
    pub data: Vec<Chapter>,
}

/// One verse inside one edition payload.
///
#[derive(Clone, Debug, Deserialize)]
pub struct Ayah {
    #[serde(rename = "numberInSurah")]
    pub number: u32,
    pub text: String,
    /// Only audio editions carry this
    #[serde(default)]
    pub audio: Option<String>,
}

/// One edition of one chapter.
///
#[derive(Clone, Debug, Deserialize)]
pub struct EditionText {
    pub number: u32,
    #[serde(rename = "englishName")]
    pub english_name: String,
    pub ayahs: Vec<Ayah>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EditionSet {
    pub code: u16,
    pub data: Vec<EditionText>,
}

/// Display-ready verse assembled from the requested editions.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Verse {
    pub number: u32,
    pub text: String,
    pub translation: Option<String>,
    pub audio: Option<String>,
}

/// Zip the editions of one chapter into display-ready verses.
///
/// The first edition supplies the text, the second (if any) the translation,
/// and whichever edition carries audio URLs supplies those.  Ragged editions
/// are tolerated, the shorter ones simply stop contributing.
///
pub fn merge_editions(set: &[EditionText]) -> Vec<Verse> {
    let Some(first) = set.first() else {
        return vec![];
    };

    first
        .ayahs
        .iter()
        .enumerate()
        .map(|(i, ayah)| {
            let translation = set
                .get(1)
                .and_then(|e| e.ayahs.get(i))
                .map(|a| a.text.clone());
            let audio = set
                .iter()
                .find_map(|e| e.ayahs.get(i).and_then(|a| a.audio.clone()));
            Verse {
                number: ayah.number,
                text: ayah.text.clone(),
                translation,
                audio,
            }
        })
        .collect()
}

/// List a chapter catalogue into a string using `tabled`.
///
pub fn list_chapters(data: &[Chapter]) -> eyre::Result<String> {
    let header = vec!["N°", "Name", "English", "Meaning", "Verses", "Revelation"];

    let mut builder = Builder::default();
    builder.push_record(header);

    data.iter().for_each(|ch| {
        builder.push_record(vec![
            ch.number.to_string(),
            ch.name.clone(),
            ch.english_name.clone(),
            ch.english_meaning.clone(),
            ch.verses.to_string(),
            ch.revelation.clone(),
        ]);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("List all chapters:\n{allf}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOGUE: &str = r##"
{
  "code": 200,
  "status": "OK",
  "data": [
    {
      "number": 1,
      "name": "سُورَةُ ٱلْفَاتِحَةِ",
      "englishName": "Al-Faatiha",
      "englishNameTranslation": "The Opening",
      "numberOfAyahs": 7,
      "revelationType": "Meccan"
    },
    {
      "number": 2,
      "name": "سُورَةُ البَقَرَةِ",
      "englishName": "Al-Baqara",
      "englishNameTranslation": "The Cow",
      "numberOfAyahs": 286,
      "revelationType": "Medinan"
    }
  ]
}
"##;

    #[test]
    fn test_catalogue_decode() {
        let list: ChapterList = serde_json::from_str(CATALOGUE).unwrap();
        assert_eq!(200, list.code);
        assert_eq!(2, list.data.len());
        assert_eq!("Al-Faatiha", list.data[0].english_name);
        assert_eq!(286, list.data[1].verses);
    }

    #[test]
    fn test_list_chapters() {
        let list: ChapterList = serde_json::from_str(CATALOGUE).unwrap();
        let out = list_chapters(&list.data).unwrap();
        assert!(out.contains("Al-Baqara"));
        assert!(out.contains("The Opening"));
    }

    fn edition(name: &str, texts: &[&str], audio: bool) -> EditionText {
        EditionText {
            number: 1,
            english_name: name.to_string(),
            ayahs: texts
                .iter()
                .enumerate()
                .map(|(i, t)| Ayah {
                    number: (i + 1) as u32,
                    text: t.to_string(),
                    audio: audio.then(|| format!("https://cdn.example.net/{}.mp3", i + 1)),
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_editions() {
        let set = vec![
            edition("Simple", &["bismillah", "alhamdulillah"], false),
            edition("Asad", &["In the name", "All praise"], false),
            edition("Alafasy", &["bismillah", "alhamdulillah"], true),
        ];
        let verses = merge_editions(&set);

        assert_eq!(2, verses.len());
        assert_eq!("bismillah", verses[0].text);
        assert_eq!(Some("In the name".to_string()), verses[0].translation);
        assert!(verses[1].audio.as_ref().unwrap().ends_with("2.mp3"));
    }

    #[test]
    fn test_merge_editions_ragged() {
        let set = vec![
            edition("Simple", &["one", "two"], false),
            edition("Asad", &["first"], false),
        ];
        let verses = merge_editions(&set);

        assert_eq!(2, verses.len());
        assert_eq!(Some("first".to_string()), verses[0].translation);
        assert_eq!(None, verses[1].translation);
    }

    #[test]
    fn test_merge_editions_empty() {
        assert!(merge_editions(&[]).is_empty());
    }
}
