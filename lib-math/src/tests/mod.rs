mod quaternion;
mod triple;
mod vector;
