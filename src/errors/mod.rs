use anyhow::Context as _;

/// Add context to session script errors
pub fn script_context(path: &str) -> String {
    format!("Failed to read session script: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to a rejected console command
pub fn command_context(line: &str) -> String {
    format!("Could not run command: {}", line)
}

/// Wrap result with script context
pub fn with_script_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(script_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
