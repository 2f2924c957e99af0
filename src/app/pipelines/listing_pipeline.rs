use crate::core::{ConfigProvider, ExampleEntry, LinkedExample, ListingResult, Pipeline, Storage};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;

pub struct ListingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ListingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn link_path(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.link_prefix(),
            name,
            self.config.entry_file()
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ListingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ExampleEntry>> {
        let dir = self.config.dir();
        tracing::debug!("Reading directory: {}", dir);

        // 一次目錄列舉，不讀取任何檔案內容
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // 非 UTF-8 名稱以 lossy 方式輸出，名稱本身不做任何解析
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(ExampleEntry { name, is_dir });
        }

        Ok(entries)
    }

    async fn transform(&self, entries: Vec<ExampleEntry>) -> Result<ListingResult> {
        let mut entries = entries;

        if self.config.only_dirs() {
            entries.retain(|e| e.is_dir);
        }

        // 排序是選擇性的：預設保持目錄列舉順序
        if self.config.sort_entries() {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let links: Vec<LinkedExample> = entries
            .into_iter()
            .map(|entry| LinkedExample {
                path: self.link_path(&entry.name),
                name: entry.name,
            })
            .collect();

        // 名稱照原樣輸出，不做 markdown 跳脫
        let markdown_output = links
            .iter()
            .map(|link| format!("- [{}]({})\n", link.name, link.path))
            .collect::<String>();

        let json_output = {
            let mut json = serde_json::to_string_pretty(&links)?;
            json.push('\n');
            json
        };

        Ok(ListingResult {
            links,
            markdown_output,
            json_output,
        })
    }

    async fn load(&self, result: ListingResult) -> Result<String> {
        let rendered = match self.config.output_format() {
            "json" => result.json_output,
            _ => result.markdown_output,
        };

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing listing ({} bytes) to {}", rendered.len(), path);
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                // 標準輸出只寫清單本身，沒有其他裝飾
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
                Ok("stdout".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::config::toml_config::TomlConfig;

    fn pipeline_with(toml: &str) -> ListingPipeline<LocalStorage, TomlConfig> {
        let config: TomlConfig = toml::from_str(toml).unwrap();
        ListingPipeline::new(LocalStorage::new(".".to_string()), config)
    }

    #[tokio::test]
    async fn transform_formats_one_bullet_per_entry() {
        let pipeline = pipeline_with("[source]\ndir = \"./src/examples\"\n");
        let entries = vec![
            ExampleEntry {
                name: "drv-gpio".to_string(),
                is_dir: true,
            },
            ExampleEntry {
                name: "mutex".to_string(),
                is_dir: true,
            },
        ];

        let result = pipeline.transform(entries).await.unwrap();
        assert_eq!(
            result.markdown_output,
            "- [drv-gpio](./src/examples/drv-gpio/main.c)\n\
             - [mutex](./src/examples/mutex/main.c)\n"
        );
    }

    #[tokio::test]
    async fn transform_of_nothing_is_empty_output() {
        let pipeline = pipeline_with("[source]\ndir = \"./src/examples\"\n");
        let result = pipeline.transform(Vec::new()).await.unwrap();
        assert!(result.markdown_output.is_empty());
        assert!(result.links.is_empty());
    }

    #[tokio::test]
    async fn markdown_significant_names_are_emitted_verbatim() {
        let pipeline = pipeline_with("[source]\ndir = \"./src/examples\"\n");
        let entries = vec![ExampleEntry {
            name: "a]b[c".to_string(),
            is_dir: true,
        }];

        let result = pipeline.transform(entries).await.unwrap();
        assert_eq!(
            result.markdown_output,
            "- [a]b[c](./src/examples/a]b[c/main.c)\n"
        );
    }

    #[tokio::test]
    async fn sort_flag_orders_entries_lexicographically() {
        let pipeline = pipeline_with("[source]\ndir = \"./x\"\n[render]\nsort = true\n");
        let entries = vec![
            ExampleEntry {
                name: "c".to_string(),
                is_dir: true,
            },
            ExampleEntry {
                name: "a".to_string(),
                is_dir: true,
            },
            ExampleEntry {
                name: "b".to_string(),
                is_dir: true,
            },
        ];

        let result = pipeline.transform(entries).await.unwrap();
        assert_eq!(result.markdown_output, "- [a](./x/a/main.c)\n- [b](./x/b/main.c)\n- [c](./x/c/main.c)\n");
    }

    #[tokio::test]
    async fn only_dirs_filters_plain_files() {
        let pipeline = pipeline_with("[source]\ndir = \"./x\"\nonly_dirs = true\n");
        let entries = vec![
            ExampleEntry {
                name: "proj".to_string(),
                is_dir: true,
            },
            ExampleEntry {
                name: "README.md".to_string(),
                is_dir: false,
            },
        ];

        let result = pipeline.transform(entries).await.unwrap();
        assert_eq!(result.markdown_output, "- [proj](./x/proj/main.c)\n");
    }
}
