/// One file served by the website: the object key and its content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteFile {
    pub key: &'static str,
    pub content_type: &'static str,
}

/// The files that make up the website, in upload order
pub const WEBSITE_FILES: [SiteFile; 5] = [
    SiteFile {
        key: "404.png",
        content_type: "image/png",
    },
    SiteFile {
        key: "header.png",
        content_type: "image/png",
    },
    SiteFile {
        key: "error.html",
        content_type: "text/html",
    },
    SiteFile {
        key: "index.html",
        content_type: "text/html",
    },
    SiteFile {
        key: "styles.css",
        content_type: "text/css",
    },
];
