/// Default chunk size for streaming entries to disk.
pub const DEFAULT_BUFFER_SIZE: usize = 1 << 15;

#[derive(Clone, Copy, Debug)]
pub struct UnzipOptions {
    buffer_size:       usize,
    touch_directories: bool,
}

impl Default for UnzipOptions {
    fn default() -> Self { Self::new() }
}

impl UnzipOptions {
    pub fn new() -> Self {
        Self {
            buffer_size:       DEFAULT_BUFFER_SIZE,
            touch_directories: true,
        }
    }

    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Create and delete a sentinel file in each extracted directory so its
    /// modification time is refreshed. Some platforms do not update it on
    /// plain directory creation.
    pub fn touch_directories(mut self, touch: bool) -> Self {
        self.touch_directories = touch;
        self
    }

    pub fn get_buffer_size(&self) -> usize { self.buffer_size }

    pub fn get_touch_directories(&self) -> bool { self.touch_directories }
}
