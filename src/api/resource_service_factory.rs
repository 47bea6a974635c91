use std::fs;
use std::path::PathBuf;
use hard_xml::XmlRead;
use crate::api::models::resources_xml::ResourcesElement;
use crate::api::ResourceService;

const BUNDLED_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Loads strings.xml from STRINGS_XML_FILE_PATH (relative to the home directory), or the bundled copy when unset.
    pub fn create_or_panic() -> ResourceService {
        let resource_xml_content = match dotenv::var("STRINGS_XML_FILE_PATH") {
            Ok(strings_xml_file_path) => {
                let file_path = Self::resolve_path(&strings_xml_file_path);
                log::info!("Loading resource strings from {}", file_path.display());
                fs::read_to_string(&file_path)
                    .unwrap_or_else(|error| panic!("Couldn't read {}: {}", file_path.display(), error))
            }
            Err(_) => BUNDLED_STRINGS_XML.to_string()
        };
        Self::from_xml(&resource_xml_content).unwrap_or_else(|error| panic!("Couldn't parse resource strings: {}", error))
    }

    pub fn bundled() -> ResourceService {
        Self::from_xml(BUNDLED_STRINGS_XML).unwrap_or_else(|error| panic!("Bundled strings.xml is malformed: {}", error))
    }

    pub fn from_xml(resource_xml_content: &str) -> Result<ResourceService, String> {
        let resource_element = ResourcesElement::from_str(resource_xml_content).map_err(|error| error.to_string())?;
        Ok(ResourceService::new(resource_element))
    }

    fn resolve_path(strings_xml_file_path: &str) -> PathBuf {
        let path = PathBuf::from(strings_xml_file_path);
        if path.is_absolute() {
            return path;
        }
        match dirs::home_dir() {
            Some(home_dir) => home_dir.join(path),
            None => path
        }
    }
}
