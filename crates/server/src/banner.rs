fn banner(version: &str) -> String {
    format!(
        r#"
 ┌┬┐┌─┐┬  ┬┬┌─┐┌─┐┌─┐┌─┐┌┬┐
 ││││ │└┐┌┘│├┤ ├┤ ├┤ ├┤  ││    moviefeed
 ┴ ┴└─┘ └┘ ┴└─┘└  └─┘└─┘─┴┘    v{}
"#,
        version.trim_start_matches('v')
    )
}

pub fn print_banner(version: &str) {
    tracing::info!("{}", banner(version));
}
