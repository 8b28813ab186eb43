//! Commented `metabot.toml` template written by `metabot init`.

/// Default config filename
pub const CONFIG_FILE: &str = "metabot.toml";

/// Generate metabot.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# metabot configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Command-line flags override every value below.\n\n");

    out.push_str(
        r#"[site]
# Business or site name, substituted for {name}
# name = "Sweet Treats"

# City or region, substituted for {location}
# location = "Delhi"

# Category id for `metabot auto` (see `metabot categories`)
# category = "1"

# Google Analytics measurement id; leave unset to skip the snippet
# analytics_id = "G-XXXXXXXXX"

[build]
# Directory with the .html files, relative to this file
dir = "."

# When a page has no </title>, insert title and meta right after <head>
head_fallback = false
"#,
    );

    out
}
