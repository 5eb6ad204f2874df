use crate::Client;
use crate::client::client::image_mime;

use std::path::Path;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_image_mime_by_extension() {
    assert_eq!(image_mime(Path::new("leak.png")), "image/png");
    assert_eq!(image_mime(Path::new("leak.JPG")), "image/jpeg");
    assert_eq!(image_mime(Path::new("leak.jpeg")), "image/jpeg");
}

#[test]
fn test_image_mime_unknown_extension() {
    assert_eq!(image_mime(Path::new("notes.txt")), "application/octet-stream");
    assert_eq!(image_mime(Path::new("no_extension")), "application/octet-stream");
}
