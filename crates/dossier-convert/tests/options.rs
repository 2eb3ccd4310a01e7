use dossier_convert::backends::WkhtmltopdfOptions;

fn args_as_strings(options: &WkhtmltopdfOptions) -> Vec<String> {
    options
        .to_args()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn default_options_render_the_documented_flags() {
    let args = args_as_strings(&WkhtmltopdfOptions::default());

    for pair in [
        ["--page-size", "Letter"],
        ["--margin-top", "10mm"],
        ["--margin-right", "10mm"],
        ["--margin-bottom", "10mm"],
        ["--margin-left", "10mm"],
        ["--encoding", "UTF-8"],
    ] {
        let at = args
            .iter()
            .position(|a| a == pair[0])
            .unwrap_or_else(|| panic!("{} missing from {args:?}", pair[0]));
        assert_eq!(args[at + 1], pair[1]);
    }
    assert_eq!(args.last().map(String::as_str), Some("--enable-local-file-access"));
}

#[test]
fn local_file_access_flag_can_be_dropped() {
    let options = WkhtmltopdfOptions {
        enable_local_file_access: false,
        ..Default::default()
    };
    let args = args_as_strings(&options);
    assert!(!args.iter().any(|a| a == "--enable-local-file-access"));
}

#[test]
fn custom_page_setup_is_passed_through() {
    let options = WkhtmltopdfOptions {
        page_size: "A4".to_string(),
        margin_top: "20mm".to_string(),
        ..Default::default()
    };
    let args = args_as_strings(&options);

    let size_at = args.iter().position(|a| a == "--page-size").expect("flag");
    assert_eq!(args[size_at + 1], "A4");
    let top_at = args.iter().position(|a| a == "--margin-top").expect("flag");
    assert_eq!(args[top_at + 1], "20mm");
}
