use std::{cell::RefCell, collections::HashMap, ffi::c_void, ptr, thread_local};

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFRelease, CFTypeRef, TCFType},
    string::{CFString, CFStringRef},
};
use tracing::debug;

use crate::error::{Error, Result};

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXUIElementCreateApplication(pid: i32) -> *mut c_void;
    fn AXUIElementCopyAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementSetAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: CFTypeRef,
    ) -> i32;
    fn AXUIElementIsAttributeSettable(
        element: *mut c_void,
        attr: CFStringRef,
        settable: *mut u8,
    ) -> i32;

    // AXValue helpers for CGPoint/CGSize
    fn AXValueCreate(theType: i32, valuePtr: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(theValue: CFTypeRef, theType: i32, valuePtr: *mut c_void) -> bool;
}

#[link(name = "CoreFoundation", kind = "framework")]
unsafe extern "C" {
    fn CFBooleanGetValue(b: CFTypeRef) -> bool;
    fn CFRetain(cf: CFTypeRef) -> CFTypeRef;
}

// AXValue type constants (per Apple docs)
const K_AX_VALUE_CGPOINT_TYPE: i32 = 1;
const K_AX_VALUE_CGSIZE_TYPE: i32 = 2;
// AX error for invalid UI element (window closed / stale reference)
const K_AX_ERROR_INVALID_UI_ELEMENT: i32 = -25202;

/// Mirrors CoreGraphics `CGPoint` for AXValue interop.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CGPoint {
    pub x: f64,
    pub y: f64,
}

/// Mirrors CoreGraphics `CGSize` for AXValue interop.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CGSize {
    pub width: f64,
    pub height: f64,
}

/// RAII guard that releases a retained AX element on drop.
pub(crate) struct AXElem(*mut c_void);

impl AXElem {
    /// Take ownership of a +1 reference returned by a Create/Copy call.
    pub(crate) fn from_create(ptr: *mut c_void) -> Option<Self> {
        (!ptr.is_null()).then_some(Self(ptr))
    }

    /// Retain a borrowed reference (e.g. an element inside a CFArray).
    pub(crate) fn retain_from_borrowed(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        unsafe { CFRetain(ptr as CFTypeRef) };
        Some(Self(ptr))
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for AXElem {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

thread_local! {
    static ATTR_STRINGS: RefCell<HashMap<&'static str, CFString>> = RefCell::new(HashMap::new());
}

/// Stable CFStringRef for a known attribute name.
///
/// Avoids toll-free bridging of static strings, which can trip pointer
/// authentication on recent macOS versions.
pub(crate) fn cfstr(name: &'static str) -> CFStringRef {
    ATTR_STRINGS.with(|cell| {
        let mut m = cell.borrow_mut();
        let s = m.entry(name).or_insert_with(|| CFString::new(name));
        s.as_concrete_TypeRef()
    })
}

pub(crate) fn ax_check() -> Result<()> {
    if unsafe { AXIsProcessTrusted() } {
        Ok(())
    } else {
        Err(Error::Permission)
    }
}

/// Copy an attribute value, mapping AX error codes.
fn copy_attr(element: *mut c_void, attr: CFStringRef) -> Result<CFTypeRef> {
    let mut v: CFTypeRef = ptr::null_mut();
    let err = unsafe { AXUIElementCopyAttributeValue(element, attr, &mut v) };
    if err != 0 {
        if err == K_AX_ERROR_INVALID_UI_ELEMENT {
            return Err(Error::WindowGone);
        }
        return Err(Error::AxCode(err));
    }
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    Ok(v)
}

pub(crate) fn ax_bool(element: *mut c_void, attr: CFStringRef) -> Result<bool> {
    let v = copy_attr(element, attr)?;
    let b = unsafe { CFBooleanGetValue(v) };
    unsafe { CFRelease(v) };
    Ok(b)
}

pub(crate) fn ax_get_point(element: *mut c_void, attr: CFStringRef) -> Result<CGPoint> {
    let v = copy_attr(element, attr)?;
    let mut p = CGPoint { x: 0.0, y: 0.0 };
    let ok =
        unsafe { AXValueGetValue(v, K_AX_VALUE_CGPOINT_TYPE, &mut p as *mut _ as *mut c_void) };
    unsafe { CFRelease(v) };
    if !ok {
        return Err(Error::Unsupported);
    }
    Ok(p)
}

pub(crate) fn ax_get_size(element: *mut c_void, attr: CFStringRef) -> Result<CGSize> {
    let v = copy_attr(element, attr)?;
    let mut s = CGSize {
        width: 0.0,
        height: 0.0,
    };
    let ok = unsafe { AXValueGetValue(v, K_AX_VALUE_CGSIZE_TYPE, &mut s as *mut _ as *mut c_void) };
    unsafe { CFRelease(v) };
    if !ok {
        return Err(Error::Unsupported);
    }
    Ok(s)
}

pub(crate) fn ax_set_point(element: *mut c_void, attr: CFStringRef, p: CGPoint) -> Result<()> {
    let v = unsafe { AXValueCreate(K_AX_VALUE_CGPOINT_TYPE, &p as *const _ as *const c_void) };
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let err = unsafe { AXUIElementSetAttributeValue(element, attr, v) };
    unsafe { CFRelease(v) };
    if err != 0 {
        return Err(Error::AxCode(err));
    }
    Ok(())
}

pub(crate) fn ax_set_size(element: *mut c_void, attr: CFStringRef, s: CGSize) -> Result<()> {
    let v = unsafe { AXValueCreate(K_AX_VALUE_CGSIZE_TYPE, &s as *const _ as *const c_void) };
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let err = unsafe { AXUIElementSetAttributeValue(element, attr, v) };
    unsafe { CFRelease(v) };
    if err != 0 {
        return Err(Error::AxCode(err));
    }
    Ok(())
}

pub(crate) fn ax_is_settable(element: *mut c_void, attr: CFStringRef) -> Result<bool> {
    let mut settable: u8 = 0;
    let err = unsafe { AXUIElementIsAttributeSettable(element, attr, &mut settable) };
    if err != 0 {
        if err == K_AX_ERROR_INVALID_UI_ELEMENT {
            return Err(Error::WindowGone);
        }
        return Err(Error::AxCode(err));
    }
    Ok(settable != 0)
}

/// Resolve the window flagged `AXMain` among `pid`'s `AXWindows`.
pub(crate) fn main_window_for_pid(pid: i32) -> Result<AXElem> {
    let app = AXElem::from_create(unsafe { AXUIElementCreateApplication(pid) })
        .ok_or(Error::AppElement)?;
    let wins_ref = match copy_attr(app.as_ptr(), cfstr("AXWindows")) {
        Ok(v) => v,
        Err(e) => {
            debug!("main_window_for_pid: AXWindows unavailable pid={} err={}", pid, e);
            return Err(Error::NoMainWindow(pid));
        }
    };
    let arr = unsafe { CFArray::<*const c_void>::wrap_under_create_rule(wins_ref as _) };
    let n = unsafe { CFArrayGetCount(arr.as_concrete_TypeRef()) };
    for i in 0..n {
        let w = unsafe { CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) } as *mut c_void;
        if w.is_null() {
            continue;
        }
        if let Ok(true) = ax_bool(w, cfstr("AXMain")) {
            debug!("main_window_for_pid: pid={} index={}", pid, i);
            // Retain so the element outlives `arr`.
            return AXElem::retain_from_borrowed(w).ok_or(Error::NoMainWindow(pid));
        }
    }
    debug!("main_window_for_pid: pid={} windows={} none main", pid, n);
    Err(Error::NoMainWindow(pid))
}
