//! Field-by-field translation between request, record and response shapes.

use crate::models::department::{Department, DepartmentCreateReq, DepartmentRsp, DepartmentUpdateReq};

/// Builds a new record from a create request. Id, timestamps and tenant come
/// from [`Department::new`].
pub fn to_entity(req: DepartmentCreateReq) -> Department {
    Department {
        english_name: req.english_name,
        short_name: req.short_name,
        org_code: req.org_code,
        phone: req.phone,
        fax: req.fax,
        email: req.email,
        address: req.address,
        postal_code: req.postal_code,
        ..Department::new(req.name)
    }
}

/// Overwrites every field present in `req`; absent fields keep their stored
/// value. Id, timestamps and tenant are never touched.
pub fn update_entity(req: DepartmentUpdateReq, mut entity: Department) -> Department {
    fn merge(target: &mut Option<String>, value: Option<String>) {
        if value.is_some() {
            *target = value;
        }
    }

    if let Some(name) = req.name {
        entity.name = name;
    }
    merge(&mut entity.english_name, req.english_name);
    merge(&mut entity.short_name, req.short_name);
    merge(&mut entity.org_code, req.org_code);
    merge(&mut entity.phone, req.phone);
    merge(&mut entity.fax, req.fax);
    merge(&mut entity.email, req.email);
    merge(&mut entity.address, req.address);
    merge(&mut entity.postal_code, req.postal_code);
    entity
}

pub fn to_rsp(entity: Department) -> DepartmentRsp {
    DepartmentRsp {
        id: entity.id,
        name: entity.name,
        english_name: entity.english_name,
        short_name: entity.short_name,
        org_code: entity.org_code,
        phone: entity.phone,
        fax: entity.fax,
        email: entity.email,
        address: entity.address,
        postal_code: entity.postal_code,
        create_time: entity.create_time,
        update_time: entity.update_time,
        tenant_id: entity.tenant_id,
    }
}
