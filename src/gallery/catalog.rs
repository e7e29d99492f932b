// SPDX-License-Identifier: MPL-2.0
//! Embedded render catalog.

use super::{GalleryItem, Project, ProjectId};

const CASA_SEREN_ITEMS: &[GalleryItem] = &[
    // Living and dining room
    GalleryItem::new(1, "https://i.ibb.co/fzPqtvSg/S1.png", false),
    GalleryItem::new(2, "https://i.ibb.co/yFT7Sm2B/S2.png", false),
    GalleryItem::new(3, "https://i.ibb.co/nsyF9ypW/S3.png", true),
    // Patio and exterior
    GalleryItem::new(8, "https://i.ibb.co/20V8rLx0/P5.png", true),
    GalleryItem::new(4, "https://i.ibb.co/HfjZvj4p/P1.png", true),
    GalleryItem::new(5, "https://i.ibb.co/jv9HwpbT/P3.png", true),
    GalleryItem::new(6, "https://i.ibb.co/C3fCPcFf/P2.png", false),
    GalleryItem::new(7, "https://i.ibb.co/Ps0XZ6QG/P4.png", false),
    // Bedroom
    GalleryItem::new(9, "https://i.ibb.co/CpyfWcFT/H1.png", false),
    GalleryItem::new(10, "https://i.ibb.co/ds4gzf2p/H2.png", false),
];

const RETRO_FUTURO_ITEMS: &[GalleryItem] = &[
    GalleryItem::new(11, "https://i.ibb.co/twcyLByF/1-1.png", false),
    GalleryItem::new(12, "https://i.ibb.co/fdPtzrCz/2-2.png", false),
    GalleryItem::new(13, "https://i.ibb.co/DDzSt1Fk/3-1.png", true),
    GalleryItem::new(14, "https://i.ibb.co/rGzfccHS/4-1.png", false),
    GalleryItem::new(15, "https://i.ibb.co/WvNQrJ7Q/5.png", true),
    GalleryItem::new(16, "https://i.ibb.co/dwDy9Sdx/7-1.png", true),
    GalleryItem::new(17, "https://i.ibb.co/h1dPyRB7/8.png", true),
    GalleryItem::new(18, "https://i.ibb.co/jkXBg3Vd/10-1.png", true),
    GalleryItem::new(19, "https://i.ibb.co/q4GNNcx/11-1.png", true),
    GalleryItem::new(20, "https://i.ibb.co/5XPTKKs9/12-1.png", false),
    GalleryItem::new(21, "https://i.ibb.co/6Rg0VPcj/13-1.png", false),
    GalleryItem::new(22, "https://i.ibb.co/qMH9QRxB/14.png", false),
];

/// Projects in page order.
pub static PROJECTS: [Project; 2] = [
    Project {
        id: ProjectId::CasaSeren,
        title_key: "project-casa-seren-title",
        description_key: "project-casa-seren-description",
        items: CASA_SEREN_ITEMS,
    },
    Project {
        id: ProjectId::RetroFuturo,
        title_key: "project-retrofuturo-title",
        description_key: "project-retrofuturo-description",
        items: RETRO_FUTURO_ITEMS,
    },
];
