use std::fs;

use analysis::Lexicon;

use crate::{get_config_location, get_data_dir_location, Config};

fn prep_files() {
    let data_dir = get_data_dir_location();
    let template_dir = data_dir.join("templates");
    fs::create_dir_all(&template_dir).unwrap();
    for entry in fs::read_dir("./templates").unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        fs::copy(&path, &template_dir.join(entry.file_name())).unwrap();
    }
}

fn write_default_config() {
    let (dir, file) = get_config_location();
    if !file.exists() {
        fs::create_dir_all(dir).unwrap();
        fs::write(&file, toml::to_string(&Config::default()).unwrap()).unwrap();
        println!("Wrote default config to {:#?}", file);
    }
}

fn write_default_lexicon() {
    let (dir, _) = get_config_location();
    let lexicon_path = dir.join("lexicon.toml");
    if !lexicon_path.exists() {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            &lexicon_path,
            toml::to_string(&Lexicon::default()).unwrap(),
        )
        .unwrap();
        println!("Wrote default lexicon to {:#?}", lexicon_path);
    }
}

/// Copies templates into the data dir and seeds the config dir, so release
/// builds can run from anywhere.
pub fn install() {
    prep_files();
    write_default_config();
    write_default_lexicon();
}
