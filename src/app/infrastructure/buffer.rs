/// Read the full text of an FLTK `TextBuffer` without leaking the C copy.
///
/// fltk-rs's `TextBuffer::text()` copies the `malloc`'d string returned by
/// `Fl_Text_Buffer_text()` into a Rust `String` but never frees the C
/// allocation, leaking the full buffer size on every call. This helper goes
/// through the FFI directly and frees the pointer after copying.
pub fn read_buffer_text(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is valid while `buf` lives. Fl_Text_Buffer_text
    // returns a malloc'd, null-terminated C string (or null for an empty
    // buffer) that we own; it must be freed exactly once, after the copy.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
