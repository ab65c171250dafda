pub mod html2md;
