/// Default `tinter.toml` with every option commented out.
pub(crate) fn default_config_toml() -> String {
    r##"# Tinter Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[ai]
# model = "gemini-2.5-flash"
# api_key_env = "GEMINI_API_KEY"   # API_KEY is also checked
# temperature = 0.7                # 0.0-2.0
# max_tokens = 8192
# timeout_secs = 60                # 1-600
# style = "matrix"

[editor]
# default_preset = "dark"          # dark, light, solarized, nord
# highlight_ms = 2000              # 100-60000
# scroll_delay_ms = 100            # 0-5000

[logging]
# level = "info"                   # trace, debug, info, warn, error
"##
    .to_string()
}
