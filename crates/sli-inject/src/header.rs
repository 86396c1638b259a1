use sli_core::SliSettings;

/// Rich autocomplete stylesheet loader, destined for the document head.
///
/// Returns the empty string when the feature is off; otherwise the fixed
/// vendor snippet with the client name, version, and revision interpolated
/// as-is (unset options come through as empty strings).
pub fn rac_header(settings: &SliSettings) -> String {
    if !settings.rac {
        return String::new();
    }

    format!(
        r#"<script language="javascript" type="text/javascript">
var sliJsHost = (("https:" == document.location.protocol) ? "https://" : "http://");
document.write(unescape('%3Clink rel="stylesheet" type="text/css" href="' + sliJsHost + 'assets.resultspage.com/js/rac/sli-rac.{rac_version}.css" /%3E'));
document.write(unescape('%3Clink rel="stylesheet" type="text/css" href="' + sliJsHost + '{client_name}.resultspage.com/rac/sli-rac.css?rev={rac_revision}" /%3E'));
</script>"#,
        rac_version = settings.rac_version,
        client_name = settings.client_name,
        rac_revision = settings.rac_revision,
    )
}
