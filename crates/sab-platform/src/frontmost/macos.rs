use std::ffi::CStr;

use cocoa::base::{id, nil};
use cocoa::foundation::{NSAutoreleasePool, NSString};
use objc::{class, msg_send, sel, sel_impl};

use sab_core::ports::FrontmostAppPort;
use sab_core::SourceApp;

/// Reads `NSWorkspace.sharedWorkspace.frontmostApplication`.
#[derive(Debug, Default)]
pub struct WorkspaceFrontmostApp;

impl WorkspaceFrontmostApp {
    pub fn new() -> Self {
        Self
    }
}

impl FrontmostAppPort for WorkspaceFrontmostApp {
    fn frontmost_app(&self) -> Option<SourceApp> {
        unsafe {
            let pool = NSAutoreleasePool::new(nil);

            let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
            let app: id = if workspace == nil {
                nil
            } else {
                msg_send![workspace, frontmostApplication]
            };

            let source = if app == nil {
                None
            } else {
                let bundle_id: id = msg_send![app, bundleIdentifier];
                let name: id = msg_send![app, localizedName];
                Some(SourceApp {
                    id: ns_string_to_owned(bundle_id),
                    name: ns_string_to_owned(name),
                })
            };

            let _: () = msg_send![pool, drain];
            source
        }
    }
}

/// Copies an `NSString` out before the autorelease pool drains.
unsafe fn ns_string_to_owned(value: id) -> Option<String> {
    if value == nil {
        return None;
    }
    let ptr = NSString::UTF8String(value);
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}
