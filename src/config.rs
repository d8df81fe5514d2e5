use anyhow::{Context, Result};
use serde::Deserialize;

use prodtable::api::DEFAULT_ENDPOINT;
use prodtable::model::table::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use prodtable::model::TableModel;
use prodtable::SortMode;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_initial_sort")]
    pub initial_sort: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

fn default_initial_sort() -> String {
    SortMode::None.value().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            vim_mode: false,
            initial_sort: default_initial_sort(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            anyhow::bail!("endpoint must not be empty");
        }
        if self.page_size_options.is_empty() {
            anyhow::bail!("page_size_options must list at least one size");
        }
        if self.page_size_options.contains(&0) {
            anyhow::bail!("page_size_options must be positive");
        }
        if !self.page_size_options.contains(&self.page_size) {
            anyhow::bail!(
                "page_size {} is not one of page_size_options {:?}",
                self.page_size,
                self.page_size_options
            );
        }
        self.sort_mode()?;
        Ok(())
    }

    pub fn sort_mode(&self) -> Result<SortMode> {
        SortMode::from_value(&self.initial_sort).ok_or_else(|| {
            anyhow::anyhow!(
                "initial_sort '{}' must be one of: none, price-asc, price-desc, title-asc, title-desc",
                self.initial_sort
            )
        })
    }

    pub fn table_model(&self) -> Result<TableModel> {
        Ok(TableModel::new(
            self.page_size,
            self.page_size_options.clone(),
            self.sort_mode()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 20, 50]);
        assert!(!config.vim_mode);
        assert_eq!(config.sort_mode().unwrap(), SortMode::None);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "endpoint: http://localhost:8080/products\n\
                    page_size: 25\n\
                    page_size_options: [25, 100]\n\
                    vim_mode: true\n\
                    initial_sort: price-desc\n";
        let config = Config::from_yaml(yaml).unwrap();
        let table = config.table_model().unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert!(config.vim_mode);
        assert_eq!(table.page_size, 25);
        assert_eq!(table.page_size_options, vec![25, 100]);
        assert_eq!(table.sort_mode, SortMode::PriceDesc);
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let err = Config::from_yaml("page_size: 15").unwrap_err();
        assert!(err.to_string().contains("page_size 15"));
    }

    #[test]
    fn test_zero_page_size_option_rejected() {
        assert!(Config::from_yaml("page_size_options: [0, 10]").is_err());
        assert!(Config::from_yaml("page_size_options: []").is_err());
    }

    #[test]
    fn test_unknown_sort_rejected() {
        assert!(Config::from_yaml("initial_sort: rating").is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
