/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` wraps FLTK's `Fl_Text_Buffer_text()`, which
/// hands back a `malloc()`'d C string. The wrapper copies it into a String
/// but never frees the original allocation, so every read leaks the full
/// buffer size. Since the counter re-reads the buffer on every keystroke,
/// this helper calls the FFI directly and frees the C string itself.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is FLTK's internal buffer pointer, valid while
    // `buf` is alive. `Fl_Text_Buffer_text` returns a malloc'd,
    // null-terminated copy (or null for an empty buffer); we copy it into a
    // String and release the allocation with the matching `free`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
