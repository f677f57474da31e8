mod viewer;

pub use viewer::LogViewer;
