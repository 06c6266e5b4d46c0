//! Brochure page images served from `/assets/brochure`.

pub const PAGES: &[&str] = &[
    "/assets/brochure/page-01.svg",
    "/assets/brochure/page-02.svg",
    "/assets/brochure/page-03.svg",
    "/assets/brochure/page-04.svg",
    "/assets/brochure/page-05.svg",
    "/assets/brochure/page-06.svg",
    "/assets/brochure/page-07.svg",
    "/assets/brochure/page-08.svg",
];
