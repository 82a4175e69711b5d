use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

const BACKGROUND_KEY_BASE: &str = "/org/gnome/desktop/background/";
const SCREENSAVER_KEY_BASE: &str = "/org/gnome/desktop/screensaver/";
const KEY_PICTURE_URI: &str = "picture-uri";
const KEY_PICTURE_URI_DARK: &str = "picture-uri-dark";
const KEY_PICTURE_OPTIONS: &str = "picture-options";

/// Set the desktop background to the given image.
pub fn apply_background(path: &Path, debug: bool) -> Result<()> {
    let uri = picture_uri(path);
    dconf_write(&background_key(KEY_PICTURE_URI), &uri, debug)?;
    dconf_write(&background_key(KEY_PICTURE_URI_DARK), &uri, debug)?;
    dconf_write(&background_key(KEY_PICTURE_OPTIONS), "'zoom'", debug)?;
    Ok(())
}

/// Set the lockscreen background to the given image.
pub fn apply_lockscreen(path: &Path, debug: bool) -> Result<()> {
    let uri = picture_uri(path);
    dconf_write(&screensaver_key(KEY_PICTURE_URI), &uri, debug)?;
    Ok(())
}

fn background_key(name: &str) -> String {
    format!("{}{}", BACKGROUND_KEY_BASE, name)
}

fn screensaver_key(name: &str) -> String {
    format!("{}{}", SCREENSAVER_KEY_BASE, name)
}

/// GVariant string value for a picture-uri key, single quotes included.
fn picture_uri(path: &Path) -> String {
    format!("'file://{}'", path.display())
}

fn dconf_write(key: &str, value: &str, debug: bool) -> Result<()> {
    if debug {
        println!("dconf write {} {}", key, value);
    }

    let output = Command::new("dconf")
        .args(["write", key, value])
        .output()
        .with_context(|| format!("Failed to run dconf write {}", key))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "dconf write {} exited with {}: {}",
            key,
            output.status,
            stderr.trim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_uri_is_single_quoted_file_uri() {
        assert_eq!(picture_uri(Path::new("/a/b.jpg")), "'file:///a/b.jpg'");
    }

    #[test]
    fn test_picture_uri_keeps_spaces() {
        assert_eq!(
            picture_uri(Path::new("/pics/my wall.png")),
            "'file:///pics/my wall.png'"
        );
    }

    #[test]
    fn test_key_paths() {
        assert_eq!(
            background_key(KEY_PICTURE_URI),
            "/org/gnome/desktop/background/picture-uri"
        );
        assert_eq!(
            screensaver_key(KEY_PICTURE_URI),
            "/org/gnome/desktop/screensaver/picture-uri"
        );
    }
}
