//! # C ABI 导出
//!
//! 以宿主器件仿真器期望的符号名导出十个回调（`--features ffi`）。
//! 输入按值传递，输出通过 `double*` 写回，返回 `int` 状态码。
//!
//! 当前合金体系由环境变量 `ALLOYPARAM_MATERIAL` 选择（默认 `ingan`），
//! 首次调用时解析一次，此后只读。无法识别的名称回退到 InGaN。
//!
//! ## 安全约定
//! 每个输出指针必须为空，或指向可写且互不重叠的 `double`。
//! 任一输出指针为空时不做计算，其余非空输出写入 NaN，返回 6。
//!
//! ## 依赖关系
//! - 使用 `abi.rs` 适配层和 `materials/` 注册表

#![allow(clippy::too_many_arguments)]

use crate::abi;
use crate::error::QueryError;
use crate::materials::{get_system, tables::INGAN, AlloySystem};

use std::os::raw::{c_double, c_int};
use std::sync::LazyLock;

/// 选择合金体系的环境变量
pub const MATERIAL_ENV: &str = "ALLOYPARAM_MATERIAL";

/// 导出符号使用的合金体系
pub static ACTIVE_SYSTEM: LazyLock<&'static AlloySystem> = LazyLock::new(|| {
    std::env::var(MATERIAL_ENV)
        .ok()
        .and_then(|name| get_system(&name))
        .unwrap_or(&INGAN)
});

/// 检查输出指针后执行查询
///
/// # Safety
/// 非空指针必须可写且互不重叠。
unsafe fn with_slots<const N: usize, F>(
    slots: [(*mut c_double, &'static str); N],
    query: F,
) -> c_int
where
    F: FnOnce([&mut f64; N]) -> i32,
{
    if let Some(&(_, name)) = slots.iter().find(|(ptr, _)| ptr.is_null()) {
        for (ptr, _) in slots {
            if let Some(out) = unsafe { ptr.as_mut() } {
                *out = f64::NAN;
            }
        }
        return QueryError::NullOutputSlot(name).status();
    }
    query(slots.map(|(ptr, _)| unsafe { &mut *ptr }))
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn bandcomp(
    x: c_double,
    y: c_double,
    t: c_double,
    eg: *mut c_double,
    affinity: *mut c_double,
    nc: *mut c_double,
    nv: *mut c_double,
    degdt: *mut c_double,
) -> c_int {
    let slots = [
        (eg, "eg"),
        (affinity, "affinity"),
        (nc, "nc"),
        (nv, "nv"),
        (degdt, "degdt"),
    ];
    unsafe {
        with_slots(slots, |[eg, affinity, nc, nv, degdt]| {
            abi::bandcomp(*ACTIVE_SYSTEM, x, y, t, eg, affinity, nc, nv, degdt)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn index(
    lambda: c_double,
    t: c_double,
    x: c_double,
    y: c_double,
    nconc: c_double,
    pconc: c_double,
    field: c_double,
    n: *mut c_double,
    k: *mut c_double,
) -> c_int {
    unsafe {
        with_slots([(n, "n"), (k, "k")], |[n, k]| {
            abi::index(*ACTIVE_SYSTEM, lambda, t, x, y, nconc, pconc, field, n, k)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn conmun(
    x: c_double,
    y: c_double,
    t: c_double,
    nd: c_double,
    na: c_double,
    xpos: c_double,
    ypos: c_double,
    taun: c_double,
    mun: *mut c_double,
) -> c_int {
    unsafe {
        with_slots([(mun, "mun")], |[mun]| {
            abi::conmun(*ACTIVE_SYSTEM, x, y, t, nd, na, xpos, ypos, taun, mun)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn conmup(
    x: c_double,
    y: c_double,
    t: c_double,
    nd: c_double,
    na: c_double,
    xpos: c_double,
    ypos: c_double,
    taup: c_double,
    mup: *mut c_double,
) -> c_int {
    unsafe {
        with_slots([(mup, "mup")], |[mup]| {
            abi::conmup(*ACTIVE_SYSTEM, x, y, t, nd, na, xpos, ypos, taup, mup)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn epsilon(x: c_double, y: c_double, t: c_double, eps: *mut c_double) -> c_int {
    unsafe { with_slots([(eps, "eps")], |[eps]| abi::epsilon(*ACTIVE_SYSTEM, x, y, t, eps)) }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn taun(
    xpos: c_double,
    ypos: c_double,
    t: c_double,
    nd: c_double,
    na: c_double,
    taun: *mut c_double,
) -> c_int {
    unsafe {
        with_slots([(taun, "taun")], |[taun]| {
            abi::taun(*ACTIVE_SYSTEM, xpos, ypos, t, nd, na, taun)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn taup(
    xpos: c_double,
    ypos: c_double,
    t: c_double,
    nd: c_double,
    na: c_double,
    taup: *mut c_double,
) -> c_int {
    unsafe {
        with_slots([(taup, "taup")], |[taup]| {
            abi::taup(*ACTIVE_SYSTEM, xpos, ypos, t, nd, na, taup)
        })
    }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn copt(t: c_double, x: c_double, y: c_double, copt: *mut c_double) -> c_int {
    unsafe { with_slots([(copt, "copt")], |[copt]| abi::copt(*ACTIVE_SYSTEM, t, x, y, copt)) }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn gaun(t: c_double, x: c_double, y: c_double, gaun: *mut c_double) -> c_int {
    unsafe { with_slots([(gaun, "gaun")], |[gaun]| abi::gaun(*ACTIVE_SYSTEM, t, x, y, gaun)) }
}

/// # Safety
/// 见模块文档的安全约定。
#[no_mangle]
pub unsafe extern "C" fn gaup(t: c_double, x: c_double, y: c_double, gaup: *mut c_double) -> c_int {
    unsafe { with_slots([(gaup, "gaup")], |[gaup]| abi::gaup(*ACTIVE_SYSTEM, t, x, y, gaup)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_null_output_slot() {
        let mut eg = 0.0;
        let status = unsafe {
            bandcomp(
                0.5,
                0.0,
                300.0,
                &mut eg,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        assert_eq!(status, 6);
        assert!(eg.is_nan());

        assert_eq!(unsafe { epsilon(0.5, 0.0, 300.0, ptr::null_mut()) }, 6);
    }

    #[test]
    fn test_exported_query_succeeds() {
        let (mut n, mut k) = (0.0, 0.0);
        let status = unsafe { index(3.0, 300.0, 0.5, 0.0, 0.0, 0.0, 0.0, &mut n, &mut k) };
        assert_eq!(status, 0);
        assert!(n.is_finite());
        assert_eq!(k, 0.0);

        let mut v = 0.0;
        assert_eq!(unsafe { gaun(300.0, 0.5, 0.0, &mut v) }, 0);
        assert!(v > 0.0);
        assert_eq!(unsafe { copt(300.0, 1.5, 0.0, &mut v) }, 1);
        assert!(v.is_nan());
    }
}
