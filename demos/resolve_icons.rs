use android_apk::android::icons::select_icon;
use android_apk::{Configuration, ResourceFinderType};
use std::env;
use std::error::Error;
use std::path::Path;

// Lists the launcher icons of an APK for every configuration found in its resource table.
// Needs aapt (or aapt2) on your path.

//Usage: resolve_icons <apk-file> <default-icon-path> [aapt|aapt2]
fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <apk-file> <default-icon-path> [aapt|aapt2]", args[0]);
        return;
    }

    // Do everything else with the error trap
    match process_apk(&args[1], &args[2], args.get(3).map(String::as_str)) {
        Ok(_) => {}
        Err(e) => {
            println!("Aborted due to error: {:?}", e);
        }
    }
}

/* This is where all the processing takes place, to make error handling easier */
fn process_apk(apk_file: &str, icon_path: &str, dialect: Option<&str>) -> Result<(), Box<dyn Error>> {
    let finder_type = match dialect {
        Some(name) => Some(name.parse::<ResourceFinderType>()?),
        None => None,
    };
    let config = Configuration::defaults().copy(finder_type);

    let finder = config.resource_finder();
    let icons = finder.resolve_icons_in_arsc(Path::new(apk_file), Some(icon_path));
    if icons.is_empty() {
        println!("No icons found with {}", config.tool_program());
        return Ok(());
    }

    for (qualifier, path) in &icons {
        println!("{:>12}  {}", qualifier, path);
    }

    if let Some(best) = select_icon(&icons, None, true) {
        println!("Best PNG: {}", best);
    }

    Ok(())
}
