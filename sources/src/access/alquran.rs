//! Alquran.cloud service specifics
//!
//! Free service, no authentication.  The chapter catalogue is one GET, verse
//! content is another GET carrying several editions (text, translation, audio)
//! of the same chapter in one response.
//!

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, trace};

use miqat_formats::{merge_editions, Chapter, ChapterList, EditionSet, Verse};

use crate::site::Site;
use crate::{http_get, FetchError};

/// Number of chapters in the Quran
///
pub const CHAPTERS: u32 = 114;

/// Editions fetched when the caller has no preference: simple text, Asad
/// translation, Alafasy recitation.
///
pub const DEF_EDITIONS: &str = "quran-simple,en.asad,ar.alafasy";

/// This describes the alquran.cloud service
///
#[derive(Clone, Debug)]
pub struct AlQuran {
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` for the chapter catalogue
    pub list: String,
    /// Add this to `base_url` for one chapter, `$1` is the chapter, `$2` the editions
    pub chapter: String,
    /// reqwest blocking client
    pub client: Client,
}

impl AlQuran {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("alquran::new");

        AlQuran {
            base_url: "".to_owned(),
            list: "".to_owned(),
            chapter: "".to_owned(),
            client: Client::new(),
        }
    }

    /// Load our site details from what is in the configuration file
    ///
    #[tracing::instrument]
    pub fn load(&mut self, site: &Site) -> &mut Self {
        trace!("alquran::load({site:?})");

        self.base_url = site.base_url.to_owned();
        if let Some(list) = site.route("list") {
            self.list = list.to_owned();
        }
        if let Some(chapter) = site.route("chapter") {
            self.chapter = chapter.to_owned();
        }
        self
    }

    /// Fetch the chapter catalogue.
    ///
    #[tracing::instrument(skip(self))]
    pub fn chapters(&self) -> Result<Vec<Chapter>, FetchError> {
        trace!("alquran::chapters");

        if self.list.is_empty() {
            return Err(FetchError::NoRoute("list".to_string()));
        }

        let url = format!("{}{}", self.base_url, self.list);
        trace!("Fetching catalogue through {}…", url);

        let resp = http_get!(self, url).map_err(|e| FetchError::HTTP(e.to_string()))?;
        match resp.status() {
            StatusCode::OK => (),
            code => return Err(FetchError::Status(code.as_u16())),
        }

        let resp = resp.text().map_err(|e| FetchError::HTTP(e.to_string()))?;
        debug!("{} bytes read. ", resp.len());

        let data: ChapterList =
            serde_json::from_str(&resp).map_err(|e| FetchError::Decoding(e.to_string()))?;
        if data.code != 200 {
            return Err(FetchError::Status(data.code));
        }

        Ok(data.data)
    }

    /// Fetch one chapter in the given editions, merged into display-ready
    /// verses.
    ///
    #[tracing::instrument(skip(self))]
    pub fn verses(&self, chapter: u32, editions: &str) -> Result<Vec<Verse>, FetchError> {
        trace!("alquran::verses");

        if chapter == 0 || chapter > CHAPTERS {
            return Err(FetchError::BadParam(format!("chapter {chapter}")));
        }
        if self.chapter.is_empty() {
            return Err(FetchError::NoRoute("chapter".to_string()));
        }

        let path = self
            .chapter
            .replace("$1", &chapter.to_string())
            .replace("$2", editions);
        let url = format!("{}{}", self.base_url, path);
        trace!("Fetching chapter through {}…", url);

        let resp = http_get!(self, url).map_err(|e| FetchError::HTTP(e.to_string()))?;
        match resp.status() {
            StatusCode::OK => (),
            code => return Err(FetchError::Status(code.as_u16())),
        }

        let resp = resp.text().map_err(|e| FetchError::HTTP(e.to_string()))?;
        debug!("{} bytes read. ", resp.len());

        let data: EditionSet =
            serde_json::from_str(&resp).map_err(|e| FetchError::Decoding(e.to_string()))?;
        if data.code != 200 {
            return Err(FetchError::Status(data.code));
        }

        Ok(merge_editions(&data.data))
    }
}

impl Default for AlQuran {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

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
    }
  ]
}
"##;

    const EDITIONS: &str = r##"
{
  "code": 200,
  "status": "OK",
  "data": [
    {
      "number": 112,
      "englishName": "Al-Ikhlaas",
      "ayahs": [
        { "numberInSurah": 1, "text": "قل هو الله أحد" },
        { "numberInSurah": 2, "text": "الله الصمد" }
      ]
    },
    {
      "number": 112,
      "englishName": "Al-Ikhlaas",
      "ayahs": [
        { "numberInSurah": 1, "text": "Say: He is God, the One" },
        { "numberInSurah": 2, "text": "God, the Eternal" }
      ]
    },
    {
      "number": 112,
      "englishName": "Al-Ikhlaas",
      "ayahs": [
        {
          "numberInSurah": 1,
          "text": "قل هو الله أحد",
          "audio": "https://cdn.islamic.network/quran/audio/128/ar.alafasy/6222.mp3"
        },
        {
          "numberInSurah": 2,
          "text": "الله الصمد",
          "audio": "https://cdn.islamic.network/quran/audio/128/ar.alafasy/6223.mp3"
        }
      ]
    }
  ]
}
"##;

    fn client_for(base_url: String) -> AlQuran {
        AlQuran {
            base_url,
            list: "/surah".to_string(),
            chapter: "/surah/$1/editions/$2".to_string(),
            client: Client::new(),
        }
    }

    #[test]
    fn test_alquran_chapters() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .header(
                    "user-agent",
                    format!("{}/{}", crate_name!(), crate_version!()),
                )
                .path("/surah");
            then.status(200).body(CATALOGUE);
        });

        let site = client_for(server.base_url());
        let all = site.chapters();

        m.assert();
        assert!(all.is_ok());

        let all = all.unwrap();
        assert_eq!(1, all.len());
        assert_eq!("Al-Faatiha", all[0].english_name);
    }

    #[test]
    fn test_alquran_verses() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/surah/112/editions/{DEF_EDITIONS}"));
            then.status(200).body(EDITIONS);
        });

        let site = client_for(server.base_url());
        let verses = site.verses(112, DEF_EDITIONS);

        m.assert();
        assert!(verses.is_ok());

        let verses = verses.unwrap();
        assert_eq!(2, verses.len());
        assert_eq!("قل هو الله أحد", verses[0].text);
        assert_eq!(
            Some("Say: He is God, the One".to_string()),
            verses[0].translation
        );
        assert!(verses[1].audio.as_ref().unwrap().ends_with("6223.mp3"));
    }

    #[test]
    fn test_alquran_verses_bad_chapter() {
        let site = client_for("http://127.0.0.1:1".to_string());

        assert!(matches!(
            site.verses(0, DEF_EDITIONS),
            Err(FetchError::BadParam(_))
        ));
        assert!(matches!(
            site.verses(115, DEF_EDITIONS),
            Err(FetchError::BadParam(_))
        ));
    }

    #[test]
    fn test_alquran_not_found() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path_contains("/surah");
            then.status(404).body("{}");
        });

        let site = client_for(server.base_url());
        let all = site.chapters();

        m.assert();
        assert!(matches!(all, Err(FetchError::Status(404))));
    }
}
