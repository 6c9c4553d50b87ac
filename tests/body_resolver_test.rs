use article_image::{Document, ImageResolver, ResolvedImage, WebPageResolver};

const FINAL_URL: &str = "https://site.com/posts/1";

fn resolve(html: &str) -> ResolvedImage {
    let doc = Document::from(html);
    WebPageResolver::default().resolve(&doc, FINAL_URL)
}

#[test]
fn large_media_image_beats_icon() {
    let image = resolve(
        r#"<html><body>
            <img src="http://cdn.example.com/media/photo-large.jpg" width="800" height="600">
            <img src="http://x.com/icon.png" width="16" height="16">
        </body></html>"#,
    );

    assert_eq!(image.url, "http://cdn.example.com/media/photo-large.jpg");
    assert_eq!(image.width, 800);
    assert_eq!(image.height, 600);
}

#[test]
fn no_images_yields_empty_result() {
    assert!(resolve("<html><body><p>Just text</p></body></html>").is_empty());
}

#[test]
fn only_rejected_images_yields_empty_result() {
    let image = resolve(
        r#"<body>
            <img src="http://gravatar.com/avatar/abc.jpg" width="900" height="900">
            <img src="/img/spinner.gif">
            <img alt="no source at all" width="1000" height="1000">
        </body>"#,
    );
    assert_eq!(image, ResolvedImage::default());
}

#[test]
fn largest_surface_wins_when_any_is_significant() {
    let image = resolve(
        r#"<body>
            <img src="/media/big-upload.jpg" width="100" height="100">
            <img src="/a.jpg" width="400" height="300">
            <img src="/b.jpg" width="500" height="300">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/b.jpg");
}

#[test]
fn surface_tie_goes_to_later_image() {
    let image = resolve(
        r#"<body>
            <img src="/first.jpg" width="400" height="300" alt="first">
            <img src="/second.jpg" width="300" height="400" alt="second">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/second.jpg");
    assert_eq!(image.caption, "second");
}

#[test]
fn score_decides_when_nothing_is_significant() {
    let image = resolve(
        r#"<body>
            <img src="/a.jpg" width="100" height="100">
            <img src="/media/large/b.jpg" width="50" height="50">
            <img src="/c.jpg" width="200" height="200">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/media/large/b.jpg");
}

#[test]
fn score_tie_goes_to_later_image() {
    let image = resolve(
        r#"<body>
            <img src="/a.jpg">
            <img src="/b.jpg">
            <img src="/c.jpg">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/c.jpg");
}

#[test]
fn rejected_significant_image_still_switches_to_surface_policy() {
    // The logo exceeds the threshold and is rejected, but surface still decides:
    // the 200x200 image beats the higher-scoring 10x10 one.
    let image = resolve(
        r#"<body>
            <img src="/logo.png" width="800" height="600">
            <img src="/plain.jpg" width="200" height="200">
            <img src="/media/large.jpg" width="10" height="10">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/plain.jpg");
}

#[test]
fn lazy_loaded_sources_are_used() {
    let image = resolve(
        r#"<body>
            <img src="" data-src="/lazy/one.jpg" width="640" height="480">
            <img data-lazy-src="/lazy/two.jpg" width="10" height="10">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/lazy/one.jpg");
}

#[test]
fn thumbnail_alt_and_fb_photo_id_adjust_score() {
    let image = resolve(
        r#"<body>
            <img src="/a.jpg" alt="thumbnail">
            <img id="fbPhotoImage" src="/b.jpg">
            <img src="/c.jpg">
        </body>"#,
    );
    assert_eq!(image.url, "https://site.com/b.jpg");
}

#[test]
fn unparseable_dimensions_become_zero() {
    let image = resolve(r#"<body><img src="/a.jpg" width="100%" height="auto" alt="A"></body>"#);
    assert_eq!(image.url, "https://site.com/a.jpg");
    assert_eq!(image.width, 0);
    assert_eq!(image.height, 0);
    assert_eq!(image.caption, "A");
}

#[test]
fn relative_urls_resolve_against_final_url() {
    let image = resolve(r#"<body><img src="photo.jpg"></body>"#);
    assert_eq!(image.url, "https://site.com/posts/photo.jpg");

    let image = resolve(r#"<body><img src="//cdn.site.com/photo.jpg"></body>"#);
    assert_eq!(image.url, "https://cdn.site.com/photo.jpg");
}

#[test]
fn absolute_url_is_unchanged() {
    let image = resolve(r#"<body><img src="https://other.com/x/y.jpg?w=1"></body>"#);
    assert_eq!(image.url, "https://other.com/x/y.jpg?w=1");
}

#[test]
fn bad_final_url_keeps_reference() {
    let doc = Document::from(r#"<body><img src="/img/a.png"></body>"#);
    let image = WebPageResolver::default().resolve(&doc, "::not a url::");
    assert_eq!(image.url, "/img/a.png");
}
